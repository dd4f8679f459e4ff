//! Workflow commands understood by the CI host
//!
//! Annotations and outputs are parsed from the start of a stdout line, so they
//! bypass the tracing formatter.

use crate::core::traits::OutputSink;
use anyhow::Context;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Error annotation line
pub fn error_line(message: &str) -> String {
    format!("##[error]😭 {}", message)
}

/// Warning annotation line
pub fn warning_line(message: &str) -> String {
    format!("##[warning]😢 {}", message)
}

/// Print an error annotation
pub fn error(message: &str) {
    println!("{}", error_line(message));
}

/// Print a warning annotation
pub fn warning(message: &str) {
    println!("{}", warning_line(message));
}

/// Run outputs for GitHub Actions
///
/// Appends `name=value` to the `$GITHUB_OUTPUT` file when the runner provides
/// one, and falls back to the legacy `::set-output` command otherwise.
#[derive(Debug, Clone, Default)]
pub struct GithubOutput {
    output_file: Option<PathBuf>,
}

impl GithubOutput {
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }

    /// Read `$GITHUB_OUTPUT` from the process environment
    pub fn from_env() -> Self {
        Self::new(
            std::env::var_os("GITHUB_OUTPUT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        )
    }

    /// Legacy stdout command
    pub fn set_output_command(name: &str, value: &str) -> String {
        format!("::set-output name={}::{}", name, value)
    }
}

impl OutputSink for GithubOutput {
    fn set_output(&self, name: &str, value: &str) -> anyhow::Result<()> {
        match &self.output_file {
            Some(path) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                writeln!(file, "{}={}", name, value)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
            None => println!("{}", Self::set_output_command(name, value)),
        }
        Ok(())
    }
}
