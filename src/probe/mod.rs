//! One-shot probe client.
//!
//! # Data Flow
//! ```text
//! TransactionUsage::sample() (payload.rs)
//!     → Probe::send (client.rs): single POST, fixed timeout, no retry
//!     → ProbeOutcome (outcome.rs): Delivered | Rejected | Failed
//!     → printed by the usage-probe binary
//! ```

pub mod client;
pub mod outcome;
pub mod payload;

pub use client::Probe;
pub use outcome::{ProbeError, ProbeOutcome};
pub use payload::TransactionUsage;
