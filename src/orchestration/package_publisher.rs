//! Package Publisher - per-package decision flow
//!
//! Preparation (existence check, packaging gate, version extraction) is
//! purely local. Processing classifies the version against the registry and
//! then pushes and tags when the version is new.

use super::tag_emitter::TagEmitter;
use crate::core::config::ActionConfig;
use crate::core::descriptor::PackageDescriptor;
use crate::core::error::PublishError;
use crate::core::traits::{
    Classification, OutputSink, PackagePusher, PushRequest, RegistryIndex, RevisionTagger,
};
use crate::core::workflow;
use crate::manifest::{CaptureExtractor, Eligibility, PackableGate, VersionExtractor};
use crate::registry::{RegistryKind, SOURCE_NAME, classification_error};
use crate::security::SecureTokenManager;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Injected side-effecting collaborators
#[derive(Clone)]
pub struct Collaborators {
    pub registry: Arc<dyn RegistryIndex>,
    pub pusher: Arc<dyn PackagePusher>,
    pub tagger: Arc<dyn RevisionTagger>,
    pub outputs: Arc<dyn OutputSink>,
    pub credentials: Arc<SecureTokenManager>,
}

/// What happened to one package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Published,
    SkippedExisting,
    SkippedNoCredential,
    DryRun,
}

impl PublishOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishOutcome::Published => "published",
            PublishOutcome::SkippedExisting => "skipped (version exists)",
            PublishOutcome::SkippedNoCredential => "skipped (no NUGET_KEY)",
            PublishOutcome::DryRun => "dry run",
        }
    }
}

/// Publishing report for one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub package_name: String,
    pub version: String,
    pub classification: Classification,
    pub outcome: PublishOutcome,
    pub tag: Option<String>,
}

/// Per-package orchestrator
pub struct PackagePublisher {
    working_dir: PathBuf,
    package_dir: PathBuf,
    source: String,
    kind: RegistryKind,
    gate: PackableGate,
    versions: VersionExtractor,
    tags: Option<TagEmitter>,
    fail_if_exists: bool,
    dry_run: bool,
    collaborators: Collaborators,
}

impl PackagePublisher {
    /// Create a publisher, compiling the configured patterns
    pub fn new(config: &ActionConfig, collaborators: Collaborators) -> Result<Self, PublishError> {
        let gate = PackableGate::new(CaptureExtractor::new(
            "PACKABLE_REGEX",
            &config.packable_regex,
        )?);
        let versions =
            VersionExtractor::new(CaptureExtractor::new("VERSION_REGEX", &config.version_regex)?);

        let tags = config.tag_commit.then(|| {
            TagEmitter::new(
                config.tag_format.clone(),
                Arc::clone(&collaborators.tagger),
                Arc::clone(&collaborators.outputs),
            )
        });

        Ok(Self {
            working_dir: config.working_dir.clone(),
            package_dir: config.package_path.clone(),
            source: config.nuget_source.clone(),
            kind: RegistryKind::detect(&config.nuget_source),
            gate,
            versions,
            tags,
            fail_if_exists: config.fail_if_exists,
            dry_run: config.dry_run,
            collaborators,
        })
    }

    /// Artifact produced by `dotnet pack` for `name` at `version`
    pub fn artifact_path(&self, name: &str, version: &str) -> PathBuf {
        self.package_dir.join(format!("{}.{}.nupkg", name, version))
    }

    /// Run the local checks for `descriptor`
    ///
    /// Returns `None` when the project opts out of packaging. On success the
    /// descriptor carries a version and a package name.
    pub fn prepare(
        &self,
        mut descriptor: PackageDescriptor,
    ) -> Result<Option<PackageDescriptor>, PublishError> {
        let project_file = self.working_dir.join(descriptor.project_file());
        if !project_file.is_file() {
            return Err(PublishError::ProjectFileNotFound {
                path: descriptor.project_file().display().to_string(),
            });
        }

        if self.gate.evaluate(&project_file)? == Eligibility::Excluded {
            info!(
                "Skipping {}: not packable",
                descriptor.project_file().display()
            );
            return Ok(None);
        }

        info!("Project Filepath: {}", descriptor.project_file().display());

        if descriptor.version().is_none() {
            let version_file = self.working_dir.join(descriptor.version_file());
            if descriptor.has_separate_version_file() && !version_file.exists() {
                return Err(PublishError::VersionFileNotFound {
                    path: descriptor.version_file().display().to_string(),
                });
            }

            info!("Version Filepath: {}", descriptor.version_file().display());
            info!("Version Regex: {}", self.versions.pattern());

            let extracted = self.versions.extract(&version_file)?;
            if extracted.source != version_file {
                info!("Version read from {}", extracted.source.display());
            }
            descriptor.set_version(extracted.version);
        }

        info!("Version: {}", descriptor.version().unwrap_or_default());
        let package_name = descriptor.package_name().to_string();
        info!("Package Name: {}", package_name);

        Ok(Some(descriptor))
    }

    /// Classify, push and tag a prepared descriptor
    pub async fn process(
        &self,
        mut descriptor: PackageDescriptor,
    ) -> Result<PublishReport, PublishError> {
        let version = descriptor
            .version()
            .map(str::to_string)
            .ok_or_else(|| PublishError::VersionNotFound {
                path: descriptor.version_file().display().to_string(),
            })?;
        let package_name = descriptor.package_name().to_string();

        let classification = self
            .collaborators
            .registry
            .classify(&package_name, &version)
            .await;

        let mut report = PublishReport {
            package_name: package_name.clone(),
            version: version.clone(),
            classification: classification.clone(),
            outcome: PublishOutcome::Published,
            tag: None,
        };

        match &classification {
            Classification::New => info!("No packages found. Pushing initial version..."),
            Classification::Fresh => info!("This version is new, pushing..."),
            Classification::AlreadyExists => {
                info!("Version {} already exists", version);
                if self.fail_if_exists {
                    return Err(PublishError::VersionExists {
                        package: package_name,
                        version,
                    });
                }
                report.outcome = PublishOutcome::SkippedExisting;
                return Ok(report);
            }
            Classification::Error { status, message } => {
                return Err(classification_error(&package_name, *status, message));
            }
        }

        info!("✨ found new version ({}) of {}", version, package_name);

        if !self.collaborators.credentials.has_api_key() {
            workflow::warning("NUGET_KEY not given");
            report.outcome = PublishOutcome::SkippedNoCredential;
            return Ok(report);
        }

        let artifact = self.artifact_path(&package_name, &version);

        if self.dry_run {
            info!("dry run: would push {}", artifact.display());
            if let Some(tags) = &self.tags {
                info!("dry run: would tag {}", tags.tag_name(&version));
            }
            report.outcome = PublishOutcome::DryRun;
            return Ok(report);
        }

        info!("NuGet Source: {}", self.source);

        let request = PushRequest {
            artifact,
            source: SOURCE_NAME.to_string(),
            with_api_key: !self.kind.uses_source_credentials(),
            skip_duplicate: true,
        };
        let output = self
            .collaborators
            .pusher
            .push(&request)
            .await
            .map_err(|e| PublishError::CommandError {
                command: "dotnet nuget push".to_string(),
                message: format!("{:#}", e),
            })?;

        let credentials = &self.collaborators.credentials;
        info!("{}", credentials.mask_secrets(output.stdout.trim_end()));

        if let Some(line) = first_error_line(&output.stdout) {
            return Err(PublishError::PushFailed {
                line: credentials.mask_secrets(line),
            });
        }
        if !output.success {
            warn!(code = ?output.code, "dotnet nuget push exited unsuccessfully");
        }

        if let Some(tags) = &self.tags {
            report.tag = Some(tags.emit(&version).await?);
        }

        Ok(report)
    }
}

/// First line of push output mentioning `error` in any letter case
fn first_error_line(stdout: &str) -> Option<&str> {
    stdout
        .lines()
        .find(|line| line.to_ascii_lowercase().contains("error"))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::config_loader::{ConfigLoadOptions, ConfigLoader};
    use crate::core::traits::CommandOutput;
    use crate::orchestration::tag_emitter::tests::{RecordingOutputs, RecordingTagger};
    use async_trait::async_trait;
    use secrecy::SecretString;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Registry returning a fixed classification per package name
    #[derive(Default)]
    pub(crate) struct FakeRegistry {
        pub answers: HashMap<String, Classification>,
        pub calls: AtomicUsize,
    }

    impl FakeRegistry {
        pub fn answering(answers: &[(&str, Classification)]) -> Self {
            Self {
                answers: answers
                    .iter()
                    .map(|(name, c)| (name.to_string(), c.clone()))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RegistryIndex for FakeRegistry {
        async fn classify(&self, package_name: &str, _version: &str) -> Classification {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answers
                .get(package_name)
                .cloned()
                .unwrap_or(Classification::New)
        }
    }

    /// Pusher recording requests and answering with a canned output
    #[derive(Default)]
    pub(crate) struct RecordingPusher {
        pub requests: Mutex<Vec<PushRequest>>,
        pub output: CommandOutput,
        pub spawn_failure: bool,
    }

    #[async_trait]
    impl PackagePusher for RecordingPusher {
        async fn push(&self, request: &PushRequest) -> anyhow::Result<CommandOutput> {
            if self.spawn_failure {
                anyhow::bail!("No such file or directory");
            }
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.output.clone())
        }
    }

    pub(crate) struct Harness {
        pub registry: Arc<FakeRegistry>,
        pub pusher: Arc<RecordingPusher>,
        pub tagger: Arc<RecordingTagger>,
        pub outputs: Arc<RecordingOutputs>,
    }

    impl Harness {
        pub fn new(registry: FakeRegistry, pusher: RecordingPusher) -> Self {
            Self {
                registry: Arc::new(registry),
                pusher: Arc::new(pusher),
                tagger: Arc::new(RecordingTagger::default()),
                outputs: Arc::new(RecordingOutputs::default()),
            }
        }

        pub fn collaborators(&self, api_key: Option<&str>) -> Collaborators {
            Collaborators {
                registry: self.registry.clone(),
                pusher: self.pusher.clone(),
                tagger: self.tagger.clone(),
                outputs: self.outputs.clone(),
                credentials: Arc::new(SecureTokenManager::new(
                    Some("octocat".to_string()),
                    api_key.map(|k| SecretString::new(k.into())),
                )),
            }
        }

        pub fn pushed(&self) -> Vec<PushRequest> {
            self.pusher.requests.lock().unwrap().clone()
        }
    }

    pub(crate) fn config(working_dir: &Path, vars: &[(&str, &str)]) -> ActionConfig {
        let mut env: HashMap<String, String> = HashMap::new();
        env.insert("INPUT_PACKAGE_PATH".to_string(), "out".to_string());
        env.insert(
            "INPUT_PROJECT_FILE_PATH".to_string(),
            "src/Acme.Core/Acme.Core.csproj".to_string(),
        );
        for (key, value) in vars {
            env.insert(key.to_string(), value.to_string());
        }

        ConfigLoader::load(ConfigLoadOptions {
            working_dir: working_dir.to_path_buf(),
            cli_args: None,
            env,
        })
        .unwrap()
    }

    pub(crate) fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    pub(crate) fn csproj(version: Option<&str>, packable: Option<&str>) -> String {
        let mut body = String::from("<Project Sdk=\"Microsoft.NET.Sdk\">\n  <PropertyGroup>\n");
        if let Some(version) = version {
            body.push_str(&format!("    <Version>{}</Version>\n", version));
        }
        if let Some(packable) = packable {
            body.push_str(&format!("    <IsPackable>{}</IsPackable>\n", packable));
        }
        body.push_str("  </PropertyGroup>\n</Project>\n");
        body
    }

    fn descriptor(name: &str, version: &str) -> PackageDescriptor {
        PackageDescriptor::new(
            format!("src/{0}/{0}.csproj", name),
            None,
            Some(version.to_string()),
            None,
        )
    }

    fn publisher(harness: &Harness, vars: &[(&str, &str)], api_key: Option<&str>) -> PackagePublisher {
        let config = config(Path::new("/work"), vars);
        PackagePublisher::new(&config, harness.collaborators(api_key)).unwrap()
    }

    // ---- prepare ----

    #[test]
    fn test_prepare_extracts_version_and_name() {
        let temp_dir = TempDir::new().unwrap();
        write(
            temp_dir.path(),
            "src/Acme.Core/Acme.Core.csproj",
            &csproj(Some("1.2.3-beta.1"), None),
        );
        let harness = Harness::new(FakeRegistry::default(), RecordingPusher::default());
        let publisher =
            PackagePublisher::new(&config(temp_dir.path(), &[]), harness.collaborators(None)).unwrap();

        let prepared = publisher
            .prepare(PackageDescriptor::from_match("src/Acme.Core/Acme.Core.csproj"))
            .unwrap()
            .unwrap();

        assert_eq!(prepared.version(), Some("1.2.3-beta.1"));
        assert_eq!(prepared.package_name_opt(), Some("Acme.Core"));
    }

    #[test]
    fn test_prepare_not_packable_is_excluded() {
        let temp_dir = TempDir::new().unwrap();
        write(
            temp_dir.path(),
            "tests/Acme.Tests/Acme.Tests.csproj",
            &csproj(None, Some("false")),
        );
        let harness = Harness::new(FakeRegistry::default(), RecordingPusher::default());
        let publisher =
            PackagePublisher::new(&config(temp_dir.path(), &[]), harness.collaborators(None)).unwrap();

        let prepared = publisher
            .prepare(PackageDescriptor::from_match("tests/Acme.Tests/Acme.Tests.csproj"))
            .unwrap();
        assert!(prepared.is_none());
    }

    #[test]
    fn test_prepare_missing_project_file() {
        let temp_dir = TempDir::new().unwrap();
        let harness = Harness::new(FakeRegistry::default(), RecordingPusher::default());
        let publisher =
            PackagePublisher::new(&config(temp_dir.path(), &[]), harness.collaborators(None)).unwrap();

        let err = publisher
            .prepare(PackageDescriptor::from_match("src/Missing/Missing.csproj"))
            .unwrap_err();
        assert!(matches!(err, PublishError::ProjectFileNotFound { .. }));
    }

    #[test]
    fn test_prepare_missing_separate_version_file() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "src/Acme.Core/Acme.Core.csproj", &csproj(None, None));
        let harness = Harness::new(FakeRegistry::default(), RecordingPusher::default());
        let publisher =
            PackagePublisher::new(&config(temp_dir.path(), &[]), harness.collaborators(None)).unwrap();

        let descriptor = PackageDescriptor::new(
            "src/Acme.Core/Acme.Core.csproj",
            Some(PathBuf::from("build/version.props")),
            None,
            None,
        );
        let err = publisher.prepare(descriptor).unwrap_err();
        assert!(matches!(err, PublishError::VersionFileNotFound { .. }));
    }

    #[test]
    fn test_prepare_static_version_skips_extraction() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "src/Acme.Core/Acme.Core.csproj", &csproj(None, None));
        let harness = Harness::new(FakeRegistry::default(), RecordingPusher::default());
        let publisher =
            PackagePublisher::new(&config(temp_dir.path(), &[]), harness.collaborators(None)).unwrap();

        let descriptor = PackageDescriptor::new(
            "src/Acme.Core/Acme.Core.csproj",
            None,
            Some("9.9.9".to_string()),
            Some("Acme.Renamed".to_string()),
        );
        let prepared = publisher.prepare(descriptor).unwrap().unwrap();
        assert_eq!(prepared.version(), Some("9.9.9"));
        assert_eq!(prepared.package_name_opt(), Some("Acme.Renamed"));
    }

    #[test]
    fn test_prepare_no_version_is_extraction_error() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "src/Acme.Core/Acme.Core.csproj", &csproj(None, None));
        let harness = Harness::new(FakeRegistry::default(), RecordingPusher::default());
        let publisher =
            PackagePublisher::new(&config(temp_dir.path(), &[]), harness.collaborators(None)).unwrap();

        let err = publisher
            .prepare(PackageDescriptor::from_match("src/Acme.Core/Acme.Core.csproj"))
            .unwrap_err();
        assert!(matches!(err, PublishError::VersionNotFound { .. }));
    }

    // ---- process ----

    #[tokio::test]
    async fn test_new_package_is_pushed_with_key() {
        let harness = Harness::new(FakeRegistry::default(), RecordingPusher::default());
        let publisher = publisher(&harness, &[], Some("oy2key"));

        let report = publisher.process(descriptor("Acme.Core", "1.0.0")).await.unwrap();

        assert_eq!(report.outcome, PublishOutcome::Published);
        assert_eq!(report.classification, Classification::New);
        assert_eq!(
            harness.pushed(),
            vec![PushRequest {
                artifact: PathBuf::from("out/Acme.Core.1.0.0.nupkg"),
                source: "nuget.org".to_string(),
                with_api_key: true,
                skip_duplicate: true,
            }]
        );
    }

    #[tokio::test]
    async fn test_fresh_version_is_pushed_once() {
        let harness = Harness::new(
            FakeRegistry::answering(&[("Acme.Core", Classification::Fresh)]),
            RecordingPusher::default(),
        );
        let publisher = publisher(&harness, &[], Some("oy2key"));

        publisher.process(descriptor("Acme.Core", "1.1.0")).await.unwrap();
        assert_eq!(harness.pushed().len(), 1);
    }

    #[tokio::test]
    async fn test_existing_version_fails_by_default() {
        let harness = Harness::new(
            FakeRegistry::answering(&[("Acme.Core", Classification::AlreadyExists)]),
            RecordingPusher::default(),
        );
        let publisher = publisher(&harness, &[], Some("oy2key"));

        let err = publisher.process(descriptor("Acme.Core", "1.0.0")).await.unwrap_err();
        assert_eq!(err.to_string(), "error: Version 1.0.0 already exists");
        assert!(harness.pushed().is_empty());
    }

    #[tokio::test]
    async fn test_existing_version_skipped_when_allowed() {
        let harness = Harness::new(
            FakeRegistry::answering(&[("Acme.Core", Classification::AlreadyExists)]),
            RecordingPusher::default(),
        );
        let publisher = publisher(
            &harness,
            &[("INPUT_THOW_ERROR_IF_VERSION_EXISTS", "false")],
            Some("oy2key"),
        );

        let report = publisher.process(descriptor("Acme.Core", "1.0.0")).await.unwrap();
        assert_eq!(report.outcome, PublishOutcome::SkippedExisting);
        assert!(harness.pushed().is_empty());
    }

    #[tokio::test]
    async fn test_registry_error_is_fatal() {
        let harness = Harness::new(
            FakeRegistry::answering(&[(
                "Acme.Core",
                Classification::Error {
                    status: Some(503),
                    message: "Service Unavailable".to_string(),
                },
            )]),
            RecordingPusher::default(),
        );
        let publisher = publisher(&harness, &[], Some("oy2key"));

        let err = publisher.process(descriptor("Acme.Core", "1.0.0")).await.unwrap_err();
        assert_eq!(err.to_string(), "error: 503: Service Unavailable");
        assert!(harness.pushed().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_skips_push() {
        let harness = Harness::new(FakeRegistry::default(), RecordingPusher::default());
        let publisher = publisher(&harness, &[("INPUT_TAG_COMMIT", "true")], None);

        let report = publisher.process(descriptor("Acme.Core", "1.0.0")).await.unwrap();
        assert_eq!(report.outcome, PublishOutcome::SkippedNoCredential);
        assert!(harness.pushed().is_empty());
        assert!(harness.tagger.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_github_packages_push_omits_key() {
        let harness = Harness::new(FakeRegistry::default(), RecordingPusher::default());
        let publisher = publisher(
            &harness,
            &[("INPUT_NUGET_SOURCE", "https://nuget.pkg.github.com/acme")],
            Some("ghp_token"),
        );

        publisher.process(descriptor("Acme.Core", "1.0.0")).await.unwrap();
        assert!(!harness.pushed()[0].with_api_key);
    }

    #[tokio::test]
    async fn test_push_output_error_line_is_surfaced() {
        let pusher = RecordingPusher {
            output: CommandOutput::ok(
                "Pushing Acme.Core.1.0.0.nupkg to 'https://www.nuget.org/api/v2/package'...\n  Error: Response status code does not indicate success: 403 (Forbidden).\n",
            ),
            ..Default::default()
        };
        let harness = Harness::new(FakeRegistry::default(), pusher);
        let publisher = publisher(&harness, &[("INPUT_TAG_COMMIT", "true")], Some("oy2key"));

        let err = publisher.process(descriptor("Acme.Core", "1.0.0")).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "  Error: Response status code does not indicate success: 403 (Forbidden)."
        );
        assert!(harness.tagger.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_nonzero_exit_without_marker_still_succeeds() {
        let pusher = RecordingPusher {
            output: CommandOutput {
                success: false,
                code: Some(1),
                stdout: "Pushing Acme.Core.1.0.0.nupkg...\n".to_string(),
                stderr: String::new(),
            },
            ..Default::default()
        };
        let harness = Harness::new(FakeRegistry::default(), pusher);
        let publisher = publisher(&harness, &[], Some("oy2key"));

        let report = publisher.process(descriptor("Acme.Core", "1.0.0")).await.unwrap();
        assert_eq!(report.outcome, PublishOutcome::Published);
    }

    #[tokio::test]
    async fn test_spawn_failure_is_command_error() {
        let pusher = RecordingPusher {
            spawn_failure: true,
            ..Default::default()
        };
        let harness = Harness::new(FakeRegistry::default(), pusher);
        let publisher = publisher(&harness, &[], Some("oy2key"));

        let err = publisher.process(descriptor("Acme.Core", "1.0.0")).await.unwrap_err();
        assert!(matches!(err, PublishError::CommandError { .. }));
    }

    #[tokio::test]
    async fn test_publish_with_tagging_emits_one_tag() {
        let harness = Harness::new(FakeRegistry::default(), RecordingPusher::default());
        let publisher = publisher(
            &harness,
            &[("INPUT_TAG_COMMIT", "true"), ("INPUT_TAG_FORMAT", "release/*")],
            Some("oy2key"),
        );

        let report = publisher.process(descriptor("Acme.Core", "2.1.0")).await.unwrap();

        assert_eq!(report.tag.as_deref(), Some("release/2.1.0"));
        assert_eq!(
            *harness.tagger.calls.lock().unwrap(),
            vec!["tag release/2.1.0".to_string(), "push origin release/2.1.0".to_string()]
        );
        assert_eq!(
            *harness.outputs.values.lock().unwrap(),
            vec![("VERSION".to_string(), "release/2.1.0".to_string())]
        );
    }

    #[tokio::test]
    async fn test_dry_run_has_no_side_effects() {
        let harness = Harness::new(FakeRegistry::default(), RecordingPusher::default());
        let publisher = publisher(
            &harness,
            &[("INPUT_DRY_RUN", "true"), ("INPUT_TAG_COMMIT", "true")],
            Some("oy2key"),
        );

        let report = publisher.process(descriptor("Acme.Core", "1.0.0")).await.unwrap();

        assert_eq!(report.outcome, PublishOutcome::DryRun);
        assert_eq!(harness.registry.calls.load(Ordering::SeqCst), 1);
        assert!(harness.pushed().is_empty());
        assert!(harness.tagger.calls.lock().unwrap().is_empty());
        assert!(harness.outputs.values.lock().unwrap().is_empty());
    }

    #[test]
    fn test_first_error_line() {
        assert_eq!(
            first_error_line("ok\n  error: boom\nerror: second"),
            Some("  error: boom")
        );
        assert_eq!(first_error_line("ERROR here"), Some("ERROR here"));
        assert_eq!(first_error_line("Your package was pushed."), None);
    }
}
