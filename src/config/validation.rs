//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees syntactically.
//! Pure function returning all violations, not just the first; runs before
//! the configuration is accepted into the system.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AgentConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("auth.access_token must not be empty")]
    EmptyAccessToken,

    #[error("tools.{0} must name a command")]
    EmptyToolCommand(&'static str),
}

pub fn validate_config(config: &AgentConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.auth.access_token.is_empty() {
        errors.push(ValidationError::EmptyAccessToken);
    }

    let tools = [
        ("config_tool", &config.tools.config_tool),
        ("status_tool", &config.tools.status_tool),
        ("down_tool", &config.tools.down_tool),
        ("up_tool", &config.tools.up_tool),
    ];
    for (name, argv) in tools {
        if argv.is_empty() || argv[0].is_empty() {
            errors.push(ValidationError::EmptyToolCommand(name));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
