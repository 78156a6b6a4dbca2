//! Interface utility wrapper: `status iface`, `down iface`, `up iface`.

use std::sync::Arc;

use crate::exec::{CommandRunner, ExecError};

/// Typed front for the interface status/up/down utilities.
pub struct IfaceControl {
    status_tool: Vec<String>,
    down_tool: Vec<String>,
    up_tool: Vec<String>,
    runner: Arc<dyn CommandRunner>,
}

impl IfaceControl {
    pub fn new(
        status_tool: Vec<String>,
        down_tool: Vec<String>,
        up_tool: Vec<String>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            status_tool,
            down_tool,
            up_tool,
            runner,
        }
    }

    /// Query interface state; stdout is the tool's JSON document, returned
    /// raw for the caller to parse.
    pub async fn status(&self, interface: &str) -> Result<String, ExecError> {
        self.invoke(&self.status_tool, interface).await
    }

    pub async fn down(&self, interface: &str) -> Result<(), ExecError> {
        self.invoke(&self.down_tool, interface).await?;
        Ok(())
    }

    pub async fn up(&self, interface: &str) -> Result<(), ExecError> {
        self.invoke(&self.up_tool, interface).await?;
        Ok(())
    }

    async fn invoke(&self, tool: &[String], interface: &str) -> Result<String, ExecError> {
        let mut argv = tool.to_vec();
        argv.push(interface.to_string());
        self.runner.run(&argv).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRunner {
        calls: Mutex<Vec<Vec<String>>>,
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(&self, argv: &[String]) -> Result<String, ExecError> {
            self.calls.lock().unwrap().push(argv.to_vec());
            Ok("{}".to_string())
        }
    }

    #[tokio::test]
    async fn appends_interface_to_each_tool() {
        let runner = Arc::new(RecordingRunner::default());
        let iface = IfaceControl::new(
            vec!["/sbin/ifstatus".into()],
            vec!["/sbin/ifdown".into()],
            vec!["/sbin/ifup".into()],
            runner.clone(),
        );

        iface.down("wan").await.unwrap();
        iface.up("wan").await.unwrap();
        iface.status("wan").await.unwrap();

        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls[0], ["/sbin/ifdown", "wan"]);
        assert_eq!(calls[1], ["/sbin/ifup", "wan"]);
        assert_eq!(calls[2], ["/sbin/ifstatus", "wan"]);
    }
}
