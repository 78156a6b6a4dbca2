//! Observability subsystem.
//!
//! Structured logging only: request IDs flow through the tower-http layer
//! and every dispatch decision is logged with them. There is no metrics
//! endpoint on this system.

pub mod logging;
