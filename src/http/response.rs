//! Response bodies sent back to clients.
//!
//! # Responsibilities
//! - Acknowledgment returned for every successfully read POST
//! - Error body and 500 mapping for processing failures
//! - Static HTML status page for GET

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ReceiverConfig;

pub const SUCCESS_STATUS: &str = "success";
pub const ERROR_STATUS: &str = "error";
pub const ACK_MESSAGE: &str = "Usage data received successfully";

/// Local wall-clock time as `YYYY-MM-DD HH:MM:SS`.
pub fn human_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Fixed-shape reply to a received POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub status: String,
    pub message: String,
    pub timestamp: String,
    pub data_size: usize,
}

impl Acknowledgment {
    pub fn success(timestamp: String, data_size: usize) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            message: ACK_MESSAGE.to_string(),
            timestamp,
            data_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ERROR_STATUS.to_string(),
            message: message.into(),
        }
    }
}

/// Failures while processing a POST. All of them become a 500.
#[derive(Debug, Error)]
pub enum ReceiverError {
    #[error("failed to read request body: {0}")]
    Body(#[from] axum::Error),
}

impl IntoResponse for ReceiverError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        println!("❌ Error processing request: {message}");
        tracing::error!(error = %message, "Request processing failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(message))).into_response()
    }
}

/// Informational HTML page served for every GET.
pub fn status_page(config: &ReceiverConfig, rendered_at: &str) -> String {
    let port = config
        .port()
        .map(|p| p.to_string())
        .unwrap_or_else(|| config.bind_address.clone());
    let endpoint = config.endpoint_url();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Usage Data Test Receiver</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; }}
        .status {{ color: green; font-weight: bold; }}
        .endpoint {{ background: #f0f0f0; padding: 10px; border-radius: 5px; }}
        .info {{ background: #e7f3ff; padding: 15px; border-radius: 5px; margin: 10px 0; }}
    </style>
</head>
<body>
    <h1>🚀 Usage Data Test Receiver</h1>
    <p class="status">✅ Server is running and ready to receive data!</p>

    <div class="info">
        <h3>📡 Server Details:</h3>
        <ul>
            <li><strong>Port:</strong> {port}</li>
            <li><strong>Endpoint:</strong> <code class="endpoint">{endpoint}</code></li>
            <li><strong>Status:</strong> Active</li>
            <li><strong>Time:</strong> {rendered_at}</li>
        </ul>
    </div>

    <div class="info">
        <h3>🔧 How to Test:</h3>
        <ol>
            <li>Point your publisher at: <code>{endpoint}</code></li>
            <li>Deploy the usage data collector</li>
            <li>Generate some transactions</li>
            <li>Watch the receiver console for incoming data</li>
        </ol>
    </div>

    <div class="info">
        <h3>📝 What You'll See:</h3>
        <p>For every POST the receiver console shows:</p>
        <ul>
            <li>Timestamp of data reception</li>
            <li>Source IP and port</li>
            <li>HTTP headers</li>
            <li>Complete JSON payload</li>
        </ul>
    </div>
</body>
</html>
"#
    )
}
