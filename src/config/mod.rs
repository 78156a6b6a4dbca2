//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! TOML file (optional)
//!     → loader.rs (read, parse)
//!     → validation.rs (semantic checks, all errors reported)
//!     → schema.rs types, immutable for the life of the process
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AgentConfig, AuthConfig, ListenerConfig, ToolsConfig};
pub use validation::{validate_config, ValidationError};
