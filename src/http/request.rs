//! Request decoding and the operator-facing receipt dump.
//!
//! # Design Decisions
//! - JSON parse failure is not an error: the body falls back to raw text
//! - Raw text is decoded lossily so any byte sequence can be displayed
//! - Headers are grouped by name in first-seen order (hyper does not keep
//!   full arrival order); repeated values stay in their own order

use std::fmt;
use std::net::SocketAddr;

use axum::http::{HeaderMap, Uri};
use serde_json::Value;

const RULE_WIDTH: usize = 60;

/// Body of a received POST.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body parsed as JSON.
    Json(Value),
    /// Body that is not JSON, shown as text.
    Raw(String),
}

impl Payload {
    pub fn parse(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Raw(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Payload::Json(_))
    }

    /// Text shown to the operator: pretty JSON (2-space indent) or the raw body.
    pub fn render(&self) -> String {
        match self {
            Payload::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Payload::Raw(text) => text.clone(),
        }
    }
}

/// Everything printed for one received POST.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub received_at: String,
    pub peer: SocketAddr,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub payload: Payload,
}

impl Receipt {
    pub fn new(
        received_at: String,
        peer: SocketAddr,
        uri: &Uri,
        headers: &HeaderMap,
        payload: Payload,
    ) -> Self {
        let path = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());

        let headers = headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        Self {
            received_at,
            peer,
            path,
            headers,
            payload,
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "📊 USAGE DATA RECEIVED at {}", self.received_at)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "🌐 From: {}:{}", self.peer.ip(), self.peer.port())?;
        writeln!(f, "📍 Path: {}", self.path)?;
        writeln!(f, "📋 Headers:")?;
        for (name, value) in &self.headers {
            writeln!(f, "   {name}: {value}")?;
        }
        writeln!(f, "📦 Data:")?;
        writeln!(f, "{}", self.payload.render())?;
        writeln!(f, "{rule}")
    }
}
