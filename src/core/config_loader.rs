//! Configuration loader for nuget-publisher
//!
//! This module provides configuration loading, validation, and merging of
//! the environment and CLI layers.

use super::config::*;
use crate::core::error::PublishError;
use secrecy::SecretString;
use std::collections::HashMap;
use std::path::PathBuf;

/// Environment names per input, highest priority first
///
/// Workflow inputs arrive as `INPUT_<NAME>`; plain variables are the
/// fallback so the tool also runs outside of an action step.
const ENV_KEYS: &[(&str, &[&str])] = &[
    ("packagePath", &["INPUT_PACKAGE_PATH", "PACKAGE_PATH"]),
    ("projectFile", &["INPUT_PROJECT_FILE_PATH", "PROJECT_FILE_PATH"]),
    ("versionFile", &["INPUT_VERSION_FILE_PATH", "VERSION_FILE_PATH"]),
    ("versionRegex", &["INPUT_VERSION_REGEX", "VERSION_REGEX"]),
    ("packableRegex", &["INPUT_PACKABLE_REGEX", "PACKABLE_REGEX"]),
    ("versionStatic", &["INPUT_VERSION_STATIC", "VERSION_STATIC"]),
    ("packageName", &["INPUT_PACKAGE_NAME", "PACKAGE_NAME"]),
    ("tagCommit", &["INPUT_TAG_COMMIT", "TAG_COMMIT"]),
    ("tagFormat", &["INPUT_TAG_FORMAT", "TAG_FORMAT"]),
    ("githubUser", &["INPUT_GITHUB_USER", "GITHUB_ACTOR"]),
    ("nugetKey", &["INPUT_NUGET_KEY", "NUGET_KEY"]),
    ("nugetSource", &["INPUT_NUGET_SOURCE", "NUGET_SOURCE"]),
    (
        "failIfExists",
        &[
            "INPUT_THOW_ERROR_IF_VERSION_EXISTS",
            "THOW_ERROR_IF_VERSION_EXISTS",
            "INPUT_THROW_ERROR_IF_VERSION_EXISTS",
            "THROW_ERROR_IF_VERSION_EXISTS",
        ],
    ),
    ("dryRun", &["INPUT_DRY_RUN", "DRY_RUN"]),
    ("maxConcurrency", &["INPUT_MAX_CONCURRENCY", "MAX_CONCURRENCY"]),
];

/// Configuration load options
#[derive(Debug, Clone)]
pub struct ConfigLoadOptions {
    /// Directory relative paths resolve against
    pub working_dir: PathBuf,

    /// CLI arguments (highest priority)
    pub cli_args: Option<ConfigOverrides>,

    /// Environment variables
    pub env: HashMap<String, String>,
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from multiple sources with priority
    ///
    /// Priority (high to low):
    /// 1. CLI arguments
    /// 2. Environment variables
    /// 3. Default values
    pub fn load(options: ConfigLoadOptions) -> Result<ActionConfig, PublishError> {
        let mut merged = Self::load_env_config(&options.env);

        if let Some(cli_config) = options.cli_args {
            Self::merge_into(&mut merged, cli_config);
        }

        Self::finalize(merged, options.working_dir)
    }

    /// Load the environment layer
    fn load_env_config(env: &HashMap<String, String>) -> ConfigOverrides {
        let lookup = |field: &str| -> Option<String> {
            let (_, keys) = ENV_KEYS.iter().find(|(name, _)| *name == field)?;
            keys.iter()
                .filter_map(|key| env.get(*key))
                .find(|value| !value.is_empty())
                .cloned()
        };

        ConfigOverrides {
            package_path: lookup("packagePath"),
            project_file: lookup("projectFile"),
            version_file: lookup("versionFile"),
            version_regex: lookup("versionRegex"),
            packable_regex: lookup("packableRegex"),
            version_static: lookup("versionStatic"),
            package_name: lookup("packageName"),
            tag_commit: lookup("tagCommit"),
            tag_format: lookup("tagFormat"),
            github_user: lookup("githubUser"),
            nuget_key: lookup("nugetKey"),
            nuget_source: lookup("nugetSource"),
            fail_if_exists: lookup("failIfExists"),
            dry_run: lookup("dryRun"),
            max_concurrency: lookup("maxConcurrency"),
            working_dir: None,
        }
    }

    /// Merge source layer into target
    fn merge_into(target: &mut ConfigOverrides, source: ConfigOverrides) {
        fn take(target: &mut Option<String>, source: Option<String>) {
            if let Some(value) = source.filter(|v| !v.is_empty()) {
                *target = Some(value);
            }
        }

        take(&mut target.package_path, source.package_path);
        take(&mut target.project_file, source.project_file);
        take(&mut target.version_file, source.version_file);
        take(&mut target.version_regex, source.version_regex);
        take(&mut target.packable_regex, source.packable_regex);
        take(&mut target.version_static, source.version_static);
        take(&mut target.package_name, source.package_name);
        take(&mut target.tag_commit, source.tag_commit);
        take(&mut target.tag_format, source.tag_format);
        take(&mut target.github_user, source.github_user);
        take(&mut target.nuget_key, source.nuget_key);
        take(&mut target.nuget_source, source.nuget_source);
        take(&mut target.fail_if_exists, source.fail_if_exists);
        take(&mut target.dry_run, source.dry_run);
        take(&mut target.max_concurrency, source.max_concurrency);
        take(&mut target.working_dir, source.working_dir);
    }

    /// Apply defaults and validate the merged layers
    fn finalize(layer: ConfigOverrides, working_dir: PathBuf) -> Result<ActionConfig, PublishError> {
        let package_path = layer.package_path.ok_or_else(|| PublishError::MissingInput {
            name: "PACKAGE_PATH".to_string(),
        })?;
        let project_file = layer.project_file.ok_or_else(|| PublishError::MissingInput {
            name: "PROJECT_FILE_PATH".to_string(),
        })?;

        let tag_commit = match layer.tag_commit {
            Some(value) => Self::parse_json_bool("TAG_COMMIT", &value)?,
            None => false,
        };
        let dry_run = match layer.dry_run {
            Some(value) => Self::parse_json_bool("DRY_RUN", &value)?,
            None => false,
        };
        let max_concurrency = match layer.max_concurrency {
            Some(value) => Self::parse_concurrency(&value)?,
            None => DEFAULT_MAX_CONCURRENCY,
        };

        Ok(ActionConfig {
            package_path: PathBuf::from(package_path),
            version_file: layer.version_file.unwrap_or_else(|| project_file.clone()),
            project_file,
            version_regex: layer
                .version_regex
                .unwrap_or_else(|| DEFAULT_VERSION_REGEX.to_string()),
            packable_regex: layer
                .packable_regex
                .unwrap_or_else(|| DEFAULT_PACKABLE_REGEX.to_string()),
            version_static: layer.version_static,
            package_name: layer.package_name,
            tag_commit,
            tag_format: layer
                .tag_format
                .unwrap_or_else(|| DEFAULT_TAG_FORMAT.to_string()),
            github_user: layer.github_user,
            nuget_key: layer.nuget_key.map(|key| SecretString::new(key.into())),
            nuget_source: layer
                .nuget_source
                .unwrap_or_else(|| DEFAULT_NUGET_SOURCE.to_string()),
            // Anything but the literal `false` keeps the default
            fail_if_exists: layer.fail_if_exists.as_deref() != Some("false"),
            dry_run,
            max_concurrency,
            working_dir: layer.working_dir.map(PathBuf::from).unwrap_or(working_dir),
        })
    }

    /// Parse a JSON boolean (`true` / `false`)
    fn parse_json_bool(name: &str, value: &str) -> Result<bool, PublishError> {
        serde_json::from_str::<bool>(value.trim()).map_err(|_| PublishError::InvalidInput {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    fn parse_concurrency(value: &str) -> Result<usize, PublishError> {
        match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(PublishError::InvalidInput {
                name: "MAX_CONCURRENCY".to_string(),
                value: value.to_string(),
            }),
        }
    }
}
