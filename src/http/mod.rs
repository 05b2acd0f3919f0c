//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (sequential accept loop, hyper http1, Axum router)
//!     → handlers.rs (POST: receive, GET: status page)
//!     → request.rs (payload decoding, receipt dump)
//!     → response.rs (acknowledgment, error body, status page)
//!     → Send to client, close connection
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{Payload, Receipt};
pub use response::{Acknowledgment, ErrorBody, ReceiverError};
pub use server::HttpServer;
