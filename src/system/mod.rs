//! Wrappers over the platform's network utilities.
//!
//! # Data Flow
//! ```text
//! Operation
//!     → netconfig.rs (credential get/set/commit via the config utility)
//!     → iface.rs     (status/down/up via the interface utilities)
//!     → exec::CommandRunner (argv in, stdout/stderr/exit code out)
//! ```
//!
//! Both utilities are external executables invoked by argument list; the
//! wrappers own argv composition and nothing else.

pub mod iface;
pub mod netconfig;

use std::sync::Arc;

use crate::config::ToolsConfig;
use crate::exec::CommandRunner;

pub use iface::IfaceControl;
pub use netconfig::NetConfig;

/// The pair of system utilities the API operations are built on.
pub struct SystemTools {
    pub netcfg: NetConfig,
    pub iface: IfaceControl,
}

impl SystemTools {
    pub fn new(config: &ToolsConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            netcfg: NetConfig::new(config.config_tool.clone(), runner.clone()),
            iface: IfaceControl::new(
                config.status_tool.clone(),
                config.down_tool.clone(),
                config.up_tool.clone(),
                runner,
            ),
        }
    }
}
