//! NuGet Publisher CLI
//!
//! Publishes NuGet packages whose version is not yet in the registry

use anyhow::{Context, Result};
use clap::Parser;
use nuget_publisher::core::workflow::{self, GithubOutput};
use nuget_publisher::core::{
    ActionConfig, ConfigLoadOptions, ConfigLoader, ConfigOverrides, PublishError,
};
use nuget_publisher::orchestration::{BatchPublisher, Collaborators};
use nuget_publisher::plugins::{DotnetCli, GitTagger};
use nuget_publisher::registry::{RegistryIndexClient, RegistryKind};
use nuget_publisher::security::{SafeCommandExecutor, SecureTokenManager};
use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Publish NuGet packages when their version changes
///
/// Every option falls back to `INPUT_<NAME>` and then `<NAME>` in the
/// environment.
#[derive(Parser)]
#[command(name = "nuget-publisher")]
#[command(version)]
#[command(about = "Publish NuGet packages when their version changes", long_about = None)]
struct Cli {
    /// Directory containing the packed .nupkg files
    #[arg(long)]
    package_path: Option<String>,

    /// Project file path or glob
    #[arg(long = "project-file-path")]
    project_file: Option<String>,

    /// Version file path or glob (defaults to the project file)
    #[arg(long = "version-file-path")]
    version_file: Option<String>,

    /// Regex capturing the version
    #[arg(long)]
    version_regex: Option<String>,

    /// Regex capturing the packable flag
    #[arg(long)]
    packable_regex: Option<String>,

    /// Use this version instead of extracting one
    #[arg(long)]
    version_static: Option<String>,

    /// Package name (defaults to the project file name)
    #[arg(long)]
    package_name: Option<String>,

    /// Tag the commit on publish (true|false)
    #[arg(long)]
    tag_commit: Option<String>,

    /// Tag template; `*` is replaced by the version
    #[arg(long)]
    tag_format: Option<String>,

    /// Registry user for GitHub Packages
    #[arg(long)]
    github_user: Option<String>,

    /// NuGet source URL
    #[arg(long)]
    nuget_source: Option<String>,

    /// Fail when the version already exists (true|false)
    #[arg(long = "throw-error-if-version-exists")]
    fail_if_exists: Option<String>,

    /// Only classify; never push or tag
    #[arg(long)]
    dry_run: bool,

    /// Parallel registry tasks
    #[arg(long)]
    max_concurrency: Option<usize>,

    /// Directory relative paths resolve against
    #[arg(long)]
    working_dir: Option<PathBuf>,
}

impl Cli {
    fn into_overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            package_path: self.package_path,
            project_file: self.project_file,
            version_file: self.version_file,
            version_regex: self.version_regex,
            packable_regex: self.packable_regex,
            version_static: self.version_static,
            package_name: self.package_name,
            tag_commit: self.tag_commit,
            tag_format: self.tag_format,
            github_user: self.github_user,
            // Keys only come from the environment
            nuget_key: None,
            nuget_source: self.nuget_source,
            fail_if_exists: self.fail_if_exists,
            dry_run: self.dry_run.then(|| "true".to_string()),
            max_concurrency: self.max_concurrency.map(|n| n.to_string()),
            working_dir: self.working_dir.map(|p| p.display().to_string()),
        }
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        workflow::error(&format!("{:#}", e));
        if let Some(publish_error) = e.downcast_ref::<PublishError>() {
            info!(code = publish_error.code(), "suggested actions:");
            for action in publish_error.suggested_actions() {
                info!("  - {}", action);
            }
        }
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::io::stdout)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("failed to read current directory")?;

    let config = ConfigLoader::load(ConfigLoadOptions {
        working_dir: cwd,
        cli_args: Some(cli.into_overrides()),
        env: std::env::vars().collect(),
    })?;

    let credentials = Arc::new(token_manager(&config));
    let executor = Arc::new(SafeCommandExecutor::new(
        &config.working_dir,
        Arc::clone(&credentials),
    )?);
    let dotnet = Arc::new(DotnetCli::new(
        Arc::clone(&executor),
        Arc::clone(&credentials),
    ));

    if !config.dry_run {
        let kind = RegistryKind::detect(&config.nuget_source);
        dotnet.setup_source(kind, &config.nuget_source).await?;
    }

    let collaborators = Collaborators {
        registry: Arc::new(RegistryIndexClient::new(
            config.nuget_source.clone(),
            Arc::clone(&credentials),
        )?),
        pusher: dotnet,
        tagger: Arc::new(GitTagger::new(executor)),
        outputs: Arc::new(GithubOutput::from_env()),
        credentials,
    };

    BatchPublisher::new(&config, collaborators)?.run().await?;
    Ok(())
}

fn token_manager(config: &ActionConfig) -> SecureTokenManager {
    SecureTokenManager::new(
        config.github_user.clone(),
        config
            .nuget_key
            .as_ref()
            .map(|key| SecretString::new(key.expose_secret().into())),
    )
}
