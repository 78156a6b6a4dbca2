//! External command execution.
//!
//! # Responsibilities
//! - Run an external process by argument list
//! - Capture stdout/stderr and decode them as UTF-8 text
//! - Map non-zero exit into a structured error carrying captured stderr
//!
//! # Design Decisions
//! - `CommandRunner` is a trait so tests can script the system utilities
//! - Stdout/stderr are whitespace-trimmed before being handed to callers
//! - No timeout on the child process: a hung utility ties up its request
//!   until it returns or the process is killed externally

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

/// Error raised when an external command cannot be run or exits non-zero.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The binary could not be started at all.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited with a non-zero status.
    #[error("command exited with status {code}: {stderr}")]
    NonZero { code: i32, stderr: String },
}

impl ExecError {
    /// Human-readable detail for error envelopes.
    ///
    /// Falls back to the exit status when the failing tool wrote nothing
    /// to stderr.
    pub fn detail(&self) -> String {
        match self {
            ExecError::Spawn { program, source } => format!("{program}: {source}"),
            ExecError::NonZero { code, stderr } => {
                if stderr.is_empty() {
                    format!("exit status {code}")
                } else {
                    stderr.clone()
                }
            }
        }
    }
}

/// Runs external commands on behalf of the API operations.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `argv` to completion and return its trimmed stdout.
    async fn run(&self, argv: &[String]) -> Result<String, ExecError>;
}

/// Production runner backed by real child processes.
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, argv: &[String]) -> Result<String, ExecError> {
        let (program, args) = argv.split_first().ok_or_else(|| ExecError::Spawn {
            program: "<empty>".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty argv"),
        })?;

        tracing::debug!(command = %argv.join(" "), "running external command");

        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|source| ExecError::Spawn {
                program: program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if output.status.success() {
            Ok(stdout)
        } else {
            let code = output.status.code().unwrap_or(-1);
            tracing::warn!(command = %argv.join(" "), code, stderr = %stderr, "external command failed");
            Err(ExecError::NonZero { code, stderr })
        }
    }
}
