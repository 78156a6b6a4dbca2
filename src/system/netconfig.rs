//! Config utility wrapper: `get key`, `set key=value`, `commit section`.

use std::sync::Arc;

use crate::exec::{CommandRunner, ExecError};

/// Typed front for the system configuration utility.
pub struct NetConfig {
    tool: Vec<String>,
    runner: Arc<dyn CommandRunner>,
}

impl NetConfig {
    pub fn new(tool: Vec<String>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { tool, runner }
    }

    /// Config key for an interface credential field, e.g.
    /// `network.wan.username`.
    pub fn credential_key(interface: &str, field: &str) -> String {
        format!("network.{interface}.{field}")
    }

    /// Config section covering one interface, e.g. `network.wan`.
    pub fn interface_section(interface: &str) -> String {
        format!("network.{interface}")
    }

    pub async fn get(&self, key: &str) -> Result<String, ExecError> {
        self.invoke(&["get", key]).await
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), ExecError> {
        self.invoke(&["set", &format!("{key}={value}")]).await?;
        Ok(())
    }

    pub async fn commit(&self, section: &str) -> Result<(), ExecError> {
        self.invoke(&["commit", section]).await?;
        Ok(())
    }

    async fn invoke(&self, tail: &[&str]) -> Result<String, ExecError> {
        let mut argv = self.tool.clone();
        argv.extend(tail.iter().map(|part| part.to_string()));
        self.runner.run(&argv).await
    }
}
