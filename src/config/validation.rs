//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (sizes and timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: &Config → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use reqwest::Url;
use thiserror::Error;

use crate::config::schema::{ProbeConfig, ReceiverConfig};

/// A single semantic problem with a configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("bind_address '{0}' is not a valid socket address")]
    BindAddress(String),

    #[error("endpoint_path '{0}' must start with '/'")]
    EndpointPath(String),

    #[error("max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("url '{0}' must be an absolute http or https URL")]
    Url(String),

    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,
}

pub fn validate_receiver_config(config: &ReceiverConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.bind_address.clone()));
    }
    if !config.endpoint_path.starts_with('/') {
        errors.push(ValidationError::EndpointPath(config.endpoint_path.clone()));
    }
    if config.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

pub fn validate_probe_config(config: &ProbeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::Url(config.url.clone())),
    }
    if config.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_receiver_config(&ReceiverConfig::default()).is_ok());
        assert!(validate_probe_config(&ProbeConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_receiver_error() {
        let config = ReceiverConfig {
            bind_address: "localhost".into(),
            endpoint_path: "receiver".into(),
            max_body_bytes: 0,
        };
        let errors = validate_receiver_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroBodyLimit));
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = ProbeConfig {
            url: "ftp://localhost/receiver".into(),
            timeout_secs: 0,
        };
        let errors = validate_probe_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::Url("ftp://localhost/receiver".into()),
                ValidationError::ZeroTimeout,
            ]
        );
    }
}
