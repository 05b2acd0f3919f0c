//! HTTP client side of the probe.

use reqwest::{Client, StatusCode};

use crate::config::ProbeConfig;
use crate::probe::outcome::{ProbeError, ProbeOutcome};
use crate::probe::payload::TransactionUsage;

/// Sends a payload to the receiver exactly once.
pub struct Probe {
    client: Client,
    url: String,
}

impl Probe {
    /// Build the client. Proxies are bypassed so the probe measures direct
    /// reachability of the target.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .no_proxy()
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST `payload` once and classify what happened. Never retries.
    pub async fn send(&self, payload: &TransactionUsage) -> ProbeOutcome {
        let outcome = match self.try_send(payload).await {
            Ok(outcome) => outcome,
            Err(e) => ProbeOutcome::Failed(e),
        };

        tracing::debug!(url = %self.url, outcome = outcome.kind(), "Probe finished");
        outcome
    }

    async fn try_send(&self, payload: &TransactionUsage) -> Result<ProbeOutcome, ProbeError> {
        let response = self.client.post(&self.url).json(payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::OK {
            Ok(ProbeOutcome::Delivered { body })
        } else {
            Ok(ProbeOutcome::Rejected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_targets_configured_url() {
        let config = ProbeConfig {
            url: "http://127.0.0.1:18080/ingest".into(),
            timeout_secs: 3,
        };
        let probe = Probe::new(&config).unwrap();
        assert_eq!(probe.url(), "http://127.0.0.1:18080/ingest");
    }
}
