//! SafeCommandExecutor: whitelisted external tool execution
//!
//! # Security Features
//!
//! - **Whitelist-based validation**: only `dotnet` and `git` can execute
//! - **Injection prevention**: arguments are passed as a vector, never through a shell
//! - **Working directory validation**: checked once at construction
//! - **Masked logging**: the logged command line never contains the API key
//!
//! # Example
//!
//! ```rust,no_run
//! use nuget_publisher::security::{SafeCommandExecutor, SecureTokenManager};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let executor = SafeCommandExecutor::new(".", Arc::new(SecureTokenManager::default()))?;
//! let output = executor.execute("dotnet", &["nuget", "list", "source"]).await?;
//! println!("{}", output.stdout);
//! # Ok(())
//! # }
//! ```

use super::token_manager::SecureTokenManager;
use crate::core::traits::CommandOutput;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use thiserror::Error;
use tokio::process::Command;
use tracing::info;

/// Commands the publisher is allowed to run
const ALLOWED_COMMANDS: &[&str] = &["dotnet", "git"];

/// Errors that can occur during command execution
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command is not in the allowed whitelist
    #[error("Command '{0}' is not in the allowed whitelist")]
    CommandNotAllowed(String),

    /// Working directory does not exist or is not accessible
    #[error("Working directory does not exist: {0}")]
    InvalidWorkingDirectory(PathBuf),

    /// Command could not be started (binary not found, permission denied)
    #[error("Command execution failed: {0}")]
    ExecutionFailed(String),
}

/// Safe command executor bound to a working directory
#[derive(Debug)]
pub struct SafeCommandExecutor {
    working_dir: PathBuf,
    credentials: Arc<SecureTokenManager>,
}

impl SafeCommandExecutor {
    /// Create a new executor running commands in `working_dir`
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidWorkingDirectory` if the directory does not exist.
    pub fn new<P: AsRef<Path>>(
        working_dir: P,
        credentials: Arc<SecureTokenManager>,
    ) -> Result<Self, CommandError> {
        let working_dir = working_dir.as_ref().to_path_buf();

        if !working_dir.is_dir() {
            return Err(CommandError::InvalidWorkingDirectory(working_dir));
        }

        Ok(Self {
            working_dir,
            credentials,
        })
    }

    /// Command line as it appears in logs, with the API key masked
    pub fn display_command<S: AsRef<str>>(&self, command: &str, args: &[S]) -> String {
        let mut line = command.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg.as_ref());
        }
        self.credentials.mask_secrets(&line)
    }

    /// Execute a command and capture its output
    ///
    /// A non-zero exit status is not an error here; callers inspect
    /// [`CommandOutput::success`].
    pub async fn execute<S: AsRef<str>>(
        &self,
        command: &str,
        args: &[S],
    ) -> Result<CommandOutput, CommandError> {
        let mut cmd = self.command(command, args)?;
        let output = cmd
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| CommandError::ExecutionFailed(e.to_string()))?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Execute a command with its output streamed to this process
    pub async fn execute_inherited<S: AsRef<str>>(
        &self,
        command: &str,
        args: &[S],
    ) -> Result<CommandOutput, CommandError> {
        let mut cmd = self.command(command, args)?;
        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| CommandError::ExecutionFailed(e.to_string()))?;

        Ok(CommandOutput {
            success: status.success(),
            code: status.code(),
            ..CommandOutput::default()
        })
    }

    fn command<S: AsRef<str>>(&self, command: &str, args: &[S]) -> Result<Command, CommandError> {
        if !ALLOWED_COMMANDS.contains(&command) {
            return Err(CommandError::CommandNotAllowed(command.to_string()));
        }

        info!("executing: [{}]", self.display_command(command, args));

        let mut cmd = Command::new(command);
        cmd.args(args.iter().map(|a| a.as_ref()))
            .current_dir(&self.working_dir);
        Ok(cmd)
    }
}
