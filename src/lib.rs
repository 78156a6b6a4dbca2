//! Router control agent library.

pub mod config;
pub mod exec;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod ops;
pub mod routing;
pub mod system;

pub use config::AgentConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
