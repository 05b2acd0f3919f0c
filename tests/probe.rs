//! Probe behavior against a live receiver, a failing backend and nothing at all.

use std::time::Duration;

use reqwest::StatusCode;
use usage_receiver::http::Acknowledgment;
use usage_receiver::probe::{Probe, ProbeError, ProbeOutcome, TransactionUsage};
use usage_receiver::ProbeConfig;

mod common;

fn probe_for(url: String, timeout_secs: u64) -> Probe {
    Probe::new(&ProbeConfig { url, timeout_secs }).unwrap()
}

#[tokio::test]
async fn test_probe_delivers_to_receiver() {
    let (addr, shutdown) = common::start_receiver().await;

    let payload = TransactionUsage::sample();
    let probe = probe_for(format!("http://{}/receiver", addr), 10);
    let outcome = probe.send(&payload).await;

    match outcome {
        ProbeOutcome::Delivered { body } => {
            let ack: Acknowledgment = serde_json::from_str(&body).unwrap();
            assert_eq!(ack.status, "success");
            assert_eq!(ack.message, "Usage data received successfully");
            assert_eq!(ack.data_size, serde_json::to_vec(&payload).unwrap().len());
        }
        other => panic!("expected delivery, got {:?}", other),
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_probe_reports_connection_error() {
    let addr = common::unused_addr().await;
    let probe = probe_for(format!("http://{}/receiver", addr), 10);

    let outcome = probe.send(&TransactionUsage::sample()).await;

    assert!(matches!(outcome, ProbeOutcome::Failed(ProbeError::Connect(_))), "got {:?}", outcome);
    assert_eq!(
        outcome.to_string(),
        "❌ ERROR: Could not connect to server. Is the test server running?"
    );
}

#[tokio::test]
async fn test_probe_reports_unexpected_status() {
    let addr = common::unused_addr().await;
    common::start_programmable_backend(addr, || async { (503, "maintenance".into()) }).await;

    let outcome = probe_for(format!("http://{}/receiver", addr), 10)
        .send(&TransactionUsage::sample())
        .await;

    match outcome {
        ProbeOutcome::Rejected { status, body } => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_probe_reports_timeout() {
    let addr = common::unused_addr().await;
    common::start_programmable_backend(addr, || async {
        tokio::time::sleep(Duration::from_secs(3)).await;
        (200, "late".into())
    })
    .await;

    let outcome = probe_for(format!("http://{}/receiver", addr), 1)
        .send(&TransactionUsage::sample())
        .await;

    assert!(matches!(outcome, ProbeOutcome::Failed(ProbeError::Timeout(_))), "got {:?}", outcome);
    assert_eq!(outcome.to_string(), "❌ ERROR: Request timed out");
}
