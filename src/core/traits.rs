//! Core traits and types for package publishing
//!
//! The side-effecting collaborators of a publish run (registry lookups, the
//! package push tool, revision tagging and run outputs) are modelled as
//! traits so the decision logic can be driven without network or processes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Command results
// ============================================================================

/// Captured result of an external tool invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful invocation that printed `stdout`
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

// ============================================================================
// Registry classification
// ============================================================================

/// Outcome of looking up a (package, version) pair in the registry index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    /// The registry has never seen the package
    New,
    /// The package exists but not this version
    Fresh,
    /// The version is already listed
    AlreadyExists,
    /// Unexpected status, transport failure or unreadable index
    Error {
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
        message: String,
    },
}

/// Registry index lookup
#[async_trait]
pub trait RegistryIndex: Send + Sync {
    /// Classify `version` of `package_name` against the registry
    async fn classify(&self, package_name: &str, version: &str) -> Classification;
}

// ============================================================================
// Publishing
// ============================================================================

/// Arguments of a single package push
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushRequest {
    /// Path of the `.nupkg` artifact
    pub artifact: PathBuf,
    /// Configured source name passed to `-s`
    pub source: String,
    /// Pass the API key on the command line
    pub with_api_key: bool,
    /// Tolerate an identical version already being present
    pub skip_duplicate: bool,
}

/// External package push mechanism
#[async_trait]
pub trait PackagePusher: Send + Sync {
    /// Push one artifact and return the captured tool output
    async fn push(&self, request: &PushRequest) -> anyhow::Result<CommandOutput>;
}

// ============================================================================
// Tagging and run outputs
// ============================================================================

/// Source-control tagging mechanism
#[async_trait]
pub trait RevisionTagger: Send + Sync {
    /// Create `tag` at the current revision
    async fn create_tag(&self, tag: &str) -> anyhow::Result<()>;

    /// Push `tag` to the remote
    async fn push_tag(&self, tag: &str) -> anyhow::Result<()>;
}

/// Named run outputs consumed by the CI host
pub trait OutputSink: Send + Sync {
    fn set_output(&self, name: &str, value: &str) -> anyhow::Result<()>;
}
