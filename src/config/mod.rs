//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → CLI overrides (binaries)
//!     → validation.rs (semantic checks)
//!     → ReceiverConfig / ProbeConfig (immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - Every field has a default; running with no file and no flags
//!   reproduces the fixed port 8080 / `/receiver` setup
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_receiver_config, ConfigError};
pub use schema::{ProbeConfig, ReceiverConfig};
pub use validation::ValidationError;
