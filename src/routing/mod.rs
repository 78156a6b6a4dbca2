//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (path, method)
//!     → router.rs (linear scan of the fixed table)
//!     → Return: matched Route or explicit None
//!
//! Table construction (at startup):
//!     five (path, method, operation) triples
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built once before the listener starts, immutable at runtime
//! - Exact path match, no prefixes or patterns
//! - First match wins; no-match is explicit rather than a silent default

pub mod router;

pub use router::{Route, RouteTable};
