//! Classification of a single probe attempt.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Why the probe could not get any HTTP response.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Could not connect to server. Is the test server running?")]
    Connect(#[source] reqwest::Error),

    #[error("Request timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("{0}")]
    Other(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ProbeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            ProbeError::Connect(e)
        } else if e.is_timeout() {
            ProbeError::Timeout(e)
        } else {
            ProbeError::Other(e)
        }
    }
}

/// Exactly one of these is reported per probe run.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// Receiver answered 200.
    Delivered { body: String },
    /// Receiver answered with any other status.
    Rejected { status: StatusCode, body: String },
    /// No usable response.
    Failed(ProbeError),
}

impl ProbeOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, ProbeOutcome::Delivered { .. })
    }

    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeOutcome::Delivered { .. } => "delivered",
            ProbeOutcome::Rejected { .. } => "rejected",
            ProbeOutcome::Failed(ProbeError::Connect(_)) => "connect_error",
            ProbeOutcome::Failed(ProbeError::Timeout(_)) => "timeout",
            ProbeOutcome::Failed(ProbeError::Other(_)) => "error",
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Delivered { body } => {
                writeln!(f, "✅ SUCCESS: Data sent successfully!")?;
                write!(f, "📄 Response: {body}")
            }
            ProbeOutcome::Rejected { status, body } => {
                writeln!(f, "❌ ERROR: Server returned status code {}", status.as_u16())?;
                write!(f, "📄 Response: {body}")
            }
            ProbeOutcome::Failed(e) => write!(f, "❌ ERROR: {e}"),
        }
    }
}
