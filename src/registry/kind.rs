//! Registry kind detection and index addressing

use serde::{Deserialize, Serialize};

/// Name the target source is registered under in the dotnet configuration
pub const SOURCE_NAME: &str = "nuget.org";

/// URL prefix of GitHub Packages NuGet feeds
pub const GITHUB_PACKAGES_PREFIX: &str = "https://nuget.pkg.github.com/";

/// Registry type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistryKind {
    /// NuGet v3 feed with an unauthenticated flat container index
    FlatContainer,
    /// GitHub Packages: per-package download index behind basic auth
    GitHubPackages,
}

impl RegistryKind {
    /// Select the kind from the configured source URL
    pub fn detect(source: &str) -> Self {
        if source.starts_with(GITHUB_PACKAGES_PREFIX) {
            RegistryKind::GitHubPackages
        } else {
            RegistryKind::FlatContainer
        }
    }

    /// Get string representation of registry kind
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryKind::FlatContainer => "flat-container",
            RegistryKind::GitHubPackages => "github-packages",
        }
    }

    /// Version index URL of `package_name` under `source`
    pub fn index_url(&self, source: &str, package_name: &str) -> String {
        let base = source.trim_end_matches('/');
        match self {
            RegistryKind::FlatContainer => {
                format!("{}/v3-flatcontainer/{}/index.json", base, package_name)
            }
            RegistryKind::GitHubPackages => {
                format!("{}/download/{}/index.json", base, package_name)
            }
        }
    }

    /// Whether the credential is stored with the registered source
    ///
    /// Such registries get no `-k` on push.
    pub fn uses_source_credentials(&self) -> bool {
        matches!(self, RegistryKind::GitHubPackages)
    }
}
