//! Lifecycle management subsystem.
//!
//! Startup order is main's: config first, then the server, listener last.
//! Shutdown is an interrupt or an explicit trigger; the listener stops
//! accepting and the socket is released.

pub mod shutdown;

pub use shutdown::{shutdown_signal, Shutdown};
