//! Registry index client - classifies a version against the published list
//!
//! One GET per lookup, no retry and no timeout override: the first failure
//! is reported as [`Classification::Error`].

use super::kind::RegistryKind;
use crate::core::error::PublishError;
use crate::core::traits::{Classification, RegistryIndex};
use crate::security::SecureTokenManager;
use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Body of a package version index
#[derive(Debug, Deserialize)]
struct VersionIndex {
    versions: Vec<String>,
}

/// HTTP client for NuGet version indexes
pub struct RegistryIndexClient {
    client: reqwest::Client,
    source: String,
    kind: RegistryKind,
    credentials: Arc<SecureTokenManager>,
}

impl RegistryIndexClient {
    /// Create a client for `source`, detecting the registry kind from it
    ///
    /// Redirects are not followed: a 3xx answer is reported as an error.
    pub fn new(
        source: impl Into<String>,
        credentials: Arc<SecureTokenManager>,
    ) -> Result<Self, PublishError> {
        let source = source.into();
        Ok(Self {
            client: http_client()?,
            kind: RegistryKind::detect(&source),
            source,
            credentials,
        })
    }

    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    /// Version index URL for `package_name`
    pub fn index_url(&self, package_name: &str) -> String {
        self.kind.index_url(&self.source, package_name)
    }

    fn classify_versions(index: &VersionIndex, version: &str) -> Classification {
        if index.versions.iter().any(|v| v == version) {
            Classification::AlreadyExists
        } else {
            Classification::Fresh
        }
    }
}

#[async_trait]
impl RegistryIndex for RegistryIndexClient {
    async fn classify(&self, package_name: &str, version: &str) -> Classification {
        let url = self.index_url(package_name);
        let mut request = self.client.get(&url);

        if self.kind == RegistryKind::GitHubPackages {
            info!("This is GPR, changing url for versioning...");
            let key = self.credentials.api_key().map(|k| k.expose_secret());
            request = request.basic_auth(self.credentials.user(), key);
        }
        info!(%url, "looking up published versions");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                return Classification::Error {
                    status: None,
                    message: e.to_string(),
                };
            }
        };

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("Unknown");
        info!("Status code: {}: {}", status.as_u16(), reason);

        match status {
            StatusCode::NOT_FOUND => Classification::New,
            StatusCode::OK => match response.json::<VersionIndex>().await {
                Ok(index) => {
                    debug!(count = index.versions.len(), "published versions");
                    Self::classify_versions(&index, version)
                }
                Err(e) => Classification::Error {
                    status: Some(status.as_u16()),
                    message: format!("unreadable version index: {}", e),
                },
            },
            other => Classification::Error {
                status: Some(other.as_u16()),
                message: reason.to_string(),
            },
        }
    }
}

fn http_client() -> Result<reqwest::Client, PublishError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| PublishError::NetworkError {
            message: e.to_string(),
        })
}

/// Convert an error classification into the fatal error it stands for
pub fn classification_error(package_name: &str, status: Option<u16>, message: &str) -> PublishError {
    match status {
        Some(200) => PublishError::MalformedIndex {
            package: package_name.to_string(),
            message: message.to_string(),
        },
        Some(status) => PublishError::RegistryStatus {
            status,
            reason: message.to_string(),
        },
        None => PublishError::NetworkError {
            message: message.to_string(),
        },
    }
}
