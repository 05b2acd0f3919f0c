//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Operator-facing output (receipt dumps, probe verdicts)
//!     → stdout via println!
//!
//! Diagnostics (bind, accept errors, body read failures)
//!     → tracing events → logging.rs subscriber → stderr
//! ```
//!
//! # Design Decisions
//! - No framework request logging; the receipt dump replaces it
//! - Log level configurable via RUST_LOG

pub mod logging;
