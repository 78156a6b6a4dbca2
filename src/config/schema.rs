//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file, with
//! defaults matching the target deployment. Configuration is fixed at
//! startup; there is no runtime reload.

use serde::{Deserialize, Serialize};

/// Root configuration for the agent.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AgentConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// API authentication settings.
    pub auth: AuthConfig,

    /// External utility commands.
    pub tools: ToolsConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8079").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8079".to_string(),
        }
    }
}

/// API authentication settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Static secret every request must present in the Access-Token header.
    pub access_token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token: "123456".to_string(),
        }
    }
}

/// Argv prefixes for the external system utilities.
///
/// Each entry is a full argument vector head; the operation-specific tail
/// (`get <key>`, `<iface>`, ...) is appended at call time.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Config utility (get/set/commit).
    pub config_tool: Vec<String>,

    /// Interface status query tool; prints a JSON document.
    pub status_tool: Vec<String>,

    /// Interface teardown tool.
    pub down_tool: Vec<String>,

    /// Interface bring-up tool.
    pub up_tool: Vec<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            config_tool: vec!["uci".to_string()],
            status_tool: vec!["/sbin/ifstatus".to_string()],
            down_tool: vec!["/sbin/ifdown".to_string()],
            up_tool: vec!["/sbin/ifup".to_string()],
        }
    }
}
