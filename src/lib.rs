//! Usage data test receiver and probe.
//!
//! A logging HTTP receiver that dumps every POSTed payload to the console,
//! and a one-shot probe that POSTs a synthetic usage document to it.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod probe;

pub use config::{ProbeConfig, ReceiverConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use probe::{Probe, ProbeOutcome};
