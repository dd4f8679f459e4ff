//! Dotnet Plugin - `dotnet nuget` source setup and package push

use crate::core::traits::{CommandOutput, PackagePusher, PushRequest};
use crate::registry::{RegistryKind, SOURCE_NAME};
use crate::security::{SafeCommandExecutor, SecureTokenManager};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::{info, warn};

/// `dotnet` CLI wrapper
pub struct DotnetCli {
    executor: Arc<SafeCommandExecutor>,
    credentials: Arc<SecureTokenManager>,
}

impl DotnetCli {
    pub fn new(executor: Arc<SafeCommandExecutor>, credentials: Arc<SecureTokenManager>) -> Self {
        Self {
            executor,
            credentials,
        }
    }

    /// Register and enable the target source under [`SOURCE_NAME`]
    ///
    /// Only GitHub Packages sources are added here; their credential is
    /// stored with the source so pushes don't pass `-k`.
    pub async fn setup_source(&self, kind: RegistryKind, source: &str) -> anyhow::Result<()> {
        if kind == RegistryKind::GitHubPackages {
            let args = add_source_args(source, &self.credentials);
            let output = self.executor.execute("dotnet", args.as_slice()).await?;
            self.log_output(&output);
        }

        let output = self
            .executor
            .execute("dotnet", &["nuget", "list", "source"])
            .await?;
        self.log_output(&output);

        let output = self
            .executor
            .execute("dotnet", &["nuget", "enable", "source", SOURCE_NAME])
            .await?;
        self.log_output(&output);

        Ok(())
    }

    fn log_output(&self, output: &CommandOutput) {
        let stdout = self.credentials.mask_secrets(output.stdout.trim_end());
        if !stdout.is_empty() {
            info!("{}", stdout);
        }
        if !output.success {
            let stderr = self.credentials.mask_secrets(output.stderr.trim_end());
            warn!(code = ?output.code, "dotnet exited unsuccessfully: {}", stderr);
        }
    }
}

#[async_trait]
impl PackagePusher for DotnetCli {
    async fn push(&self, request: &PushRequest) -> anyhow::Result<CommandOutput> {
        let args = push_args(request, &self.credentials);
        let output = self.executor.execute("dotnet", args.as_slice()).await?;
        Ok(output)
    }
}

fn add_source_args(source: &str, credentials: &SecureTokenManager) -> Vec<String> {
    let password = credentials
        .api_key()
        .map(|k| k.expose_secret().to_string())
        .unwrap_or_default();

    vec![
        "nuget".to_string(),
        "add".to_string(),
        "source".to_string(),
        format!("{}/index.json", source.trim_end_matches('/')),
        format!("--name={}", SOURCE_NAME),
        format!("--username={}", credentials.user()),
        format!("--password={}", password),
        "--store-password-in-clear-text".to_string(),
    ]
}

fn push_args(request: &PushRequest, credentials: &SecureTokenManager) -> Vec<String> {
    let mut args = vec![
        "nuget".to_string(),
        "push".to_string(),
        request.artifact.display().to_string(),
        "-s".to_string(),
        request.source.clone(),
    ];

    if request.with_api_key {
        if let Some(key) = credentials.api_key() {
            args.push("-k".to_string());
            args.push(key.expose_secret().to_string());
        }
    }

    if request.skip_duplicate {
        args.push("--skip-duplicate".to_string());
    }

    args
}
