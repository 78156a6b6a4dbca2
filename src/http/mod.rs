//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, dispatch: auth → route → params → invoke)
//!     → auth.rs (Access-Token check before any routing)
//!     → envelope.rs (uniform {code, message, data} response)
//!     → Send to client
//! ```

pub mod auth;
pub mod envelope;
pub mod server;

pub use envelope::{ApiResponse, Envelope, Failure, Outcome};
pub use server::HttpServer;
