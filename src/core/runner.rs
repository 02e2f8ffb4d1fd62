//! Command execution behind a small trait seam
//!
//! The orchestrator only depends on the `CommandRunner` trait, so the
//! existence-check and retry logic can be tested against a fake instead of
//! real subprocesses.
//!
//! # Security Features
//!
//! - **Whitelist-based validation**: Only pre-approved commands can execute
//! - **Injection prevention**: Uses `tokio::process::Command` which prevents shell injection
//! - **Argument safety**: Arguments passed as a slice, never interpolated into shell strings

use crate::core::error::PublishError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Allowed commands whitelist for security.
///
/// Only these commands can be executed via ProcessRunner. The workflow needs
/// exactly the registry CLI and version control.
const ALLOWED_COMMANDS: &[&str] = &["npm", "git"];

/// Captured result of a finished subprocess
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Process exit code, if the process terminated normally
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Did the process exit with status 0?
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Stderr if non-empty, otherwise stdout — the most useful line for
    /// reporting a failed command
    pub fn failure_message(&self) -> String {
        if self.stderr.trim().is_empty() {
            self.stdout.trim().to_string()
        } else {
            self.stderr.trim().to_string()
        }
    }
}

/// Capability to run an external command and observe its exit status and output
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion in the current working directory.
    ///
    /// A non-zero exit status is NOT an error here; it is reported through
    /// `CommandOutput::status`. Only failure to spawn is an `Err`.
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, PublishError>;
}

/// Real subprocess runner with whitelist validation
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, PublishError> {
        // Whitelist validation: Only pre-approved commands
        if !ALLOWED_COMMANDS.contains(&program) {
            return Err(PublishError::CommandNotAllowed {
                command: program.to_string(),
            });
        }

        // Windows-specific: npm is a .cmd file, not an .exe
        #[cfg(target_os = "windows")]
        let program_name = if program == "npm" {
            format!("{}.cmd", program)
        } else {
            program.to_string()
        };

        #[cfg(not(target_os = "windows"))]
        let program_name = program.to_string();

        let output = Command::new(&program_name)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| PublishError::CommandSpawn {
                command: program.to_string(),
                message: e.to_string(),
            })?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
