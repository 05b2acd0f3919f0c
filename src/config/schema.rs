//! Configuration schema definitions.
//!
//! All types derive Serde traits so they can be read from a TOML file.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default request body cap, matching axum's own extractor limit.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Configuration for the logging receiver.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReceiverConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Path advertised to operators as the data endpoint.
    ///
    /// Informational only: POSTs are accepted on every path.
    pub endpoint_path: String,

    /// Largest request body the receiver will buffer.
    pub max_body_bytes: usize,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            endpoint_path: "/receiver".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ReceiverConfig {
    /// Port part of `bind_address`, if it parses.
    pub fn port(&self) -> Option<u16> {
        self.bind_address
            .parse::<std::net::SocketAddr>()
            .ok()
            .map(|addr| addr.port())
    }

    /// URL an operator should point a publisher at.
    pub fn endpoint_url(&self) -> String {
        match self.port() {
            Some(port) => format!("http://localhost:{}{}", port, self.endpoint_path),
            None => format!("http://{}{}", self.bind_address, self.endpoint_path),
        }
    }
}

/// Configuration for the one-shot probe.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Target URL for the single POST.
    pub url: String,

    /// Total request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080/receiver".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
