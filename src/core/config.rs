//! Configuration structures and types for nuget-publisher
//!
//! This module provides the typed run configuration. Values are assembled by
//! [`ConfigLoader`](super::config_loader::ConfigLoader).

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default registry base URL
pub const DEFAULT_NUGET_SOURCE: &str = "https://api.nuget.org";

/// Default version capture pattern
pub const DEFAULT_VERSION_REGEX: &str = r"^\s*<Version>(.*)</Version>\s*$";

/// Default packable capture pattern
pub const DEFAULT_PACKABLE_REGEX: &str = r"^\s*<IsPackable>(.*)</IsPackable>\s*$";

/// Default tag template
pub const DEFAULT_TAG_FORMAT: &str = "v*";

/// Default number of packages classified and pushed at once
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Root configuration object
#[derive(Debug)]
pub struct ActionConfig {
    /// Directory containing the packed `.nupkg` files
    pub package_path: PathBuf,

    /// Project file path or glob
    pub project_file: String,

    /// Version file path or glob (defaults to the project file)
    pub version_file: String,

    /// Version capture pattern
    pub version_regex: String,

    /// Packable capture pattern
    pub packable_regex: String,

    /// Static version, skips extraction
    pub version_static: Option<String>,

    /// Package name override
    pub package_name: Option<String>,

    /// Tag the commit after a successful push
    pub tag_commit: bool,

    /// Tag template with a single `*`
    pub tag_format: String,

    /// Registry user (GitHub Packages)
    pub github_user: Option<String>,

    /// Registry credential
    pub nuget_key: Option<SecretString>,

    /// Registry base URL
    pub nuget_source: String,

    /// Fail the run when the version is already published
    pub fail_if_exists: bool,

    /// Classify only, no push or tag
    pub dry_run: bool,

    /// Parallel registry tasks
    pub max_concurrency: usize,

    /// Working directory paths are resolved against
    pub working_dir: PathBuf,
}

/// Layer of optional values, one per input
///
/// Used both for the environment layer and for CLI overrides; later layers
/// replace the fields they set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packable_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_static: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_user: Option<String>,
    #[serde(skip_serializing)]
    pub nuget_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nuget_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_if_exists: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
}
