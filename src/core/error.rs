//! Error handling for package publishing
//!
//! This module provides the error taxonomy of a publish run with recovery
//! guidance, using the thiserror crate for ergonomic error handling.

use thiserror::Error;

/// Broad failure class of a [`PublishError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Extraction,
    Registry,
    Publish,
    DuplicateVersion,
    Command,
}

/// Main error type for package publishing operations
#[derive(Error, Debug)]
pub enum PublishError {
    // Configuration errors
    #[error("PACKAGE_PATH not provided or not found: {path}")]
    PackageDirNotFound { path: String },

    #[error("project file not found: {path}")]
    ProjectFileNotFound { path: String },

    #[error("version file not found: {path}")]
    VersionFileNotFound { path: String },

    #[error("{name} not provided")]
    MissingInput { name: String },

    #[error("invalid {name}: {message}")]
    InvalidPattern { name: String, message: String },

    #[error("invalid value for {name}: {value}")]
    InvalidInput { name: String, value: String },

    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    // Extraction errors
    #[error("unable to extract version info from {path}")]
    VersionNotFound { path: String },

    // Registry errors
    #[error("error: {status}: {reason}")]
    RegistryStatus { status: u16, reason: String },

    #[error("error: {message}")]
    NetworkError { message: String },

    #[error("error: unreadable version index for {package}: {message}")]
    MalformedIndex { package: String, message: String },

    // Publishing errors
    #[error("{line}")]
    PushFailed { line: String },

    #[error("error: Version {version} already exists")]
    VersionExists { package: String, version: String },

    // Command execution errors
    #[error("[{command}] command error: {message}")]
    CommandError { command: String, message: String },
}

impl PublishError {
    /// Get the failure class of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PackageDirNotFound { .. }
            | Self::ProjectFileNotFound { .. }
            | Self::VersionFileNotFound { .. }
            | Self::MissingInput { .. }
            | Self::InvalidPattern { .. }
            | Self::InvalidInput { .. }
            | Self::Io { .. } => ErrorCategory::Configuration,
            Self::VersionNotFound { .. } => ErrorCategory::Extraction,
            Self::RegistryStatus { .. }
            | Self::NetworkError { .. }
            | Self::MalformedIndex { .. } => ErrorCategory::Registry,
            Self::PushFailed { .. } => ErrorCategory::Publish,
            Self::VersionExists { .. } => ErrorCategory::DuplicateVersion,
            Self::CommandError { .. } => ErrorCategory::Command,
        }
    }

    /// Get suggested actions for this error
    pub fn suggested_actions(&self) -> Vec<&'static str> {
        match self {
            Self::PackageDirNotFound { .. } => vec![
                "Run `dotnet pack` before publishing",
                "Check that PACKAGE_PATH points at the pack output directory",
            ],
            Self::ProjectFileNotFound { .. } => {
                vec!["Check PROJECT_FILE_PATH relative to the working directory"]
            }
            Self::VersionFileNotFound { .. } => {
                vec!["Check VERSION_FILE_PATH relative to the working directory"]
            }
            Self::MissingInput { .. } => vec!["Set the input in the workflow `with:` block"],
            Self::InvalidPattern { .. } => vec![
                "Check the regular expression syntax",
                "The pattern needs at least one capture group",
            ],
            Self::InvalidInput { .. } => vec!["Use `true` or `false`"],
            Self::Io { .. } => vec!["Check file permissions"],
            Self::VersionNotFound { .. } => vec![
                "Check VERSION_REGEX against the project file",
                "Set VERSION_STATIC to skip extraction",
            ],
            Self::RegistryStatus { .. } | Self::NetworkError { .. } => vec![
                "Check NUGET_SOURCE",
                "Check the registry status page",
            ],
            Self::MalformedIndex { .. } => {
                vec!["Check that NUGET_SOURCE points at a NuGet v3 feed"]
            }
            Self::PushFailed { .. } => vec![
                "Check the push output above",
                "Check that NUGET_KEY is valid and has push scope",
            ],
            Self::VersionExists { .. } => vec![
                "Bump the package version",
                "Set THOW_ERROR_IF_VERSION_EXISTS to false to skip existing versions",
            ],
            Self::CommandError { .. } => vec![
                "Check that the dotnet SDK and git are installed on the runner",
            ],
        }
    }

    /// Get error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::PackageDirNotFound { .. } => "PACKAGE_DIR_NOT_FOUND",
            Self::ProjectFileNotFound { .. } => "PROJECT_FILE_NOT_FOUND",
            Self::VersionFileNotFound { .. } => "VERSION_FILE_NOT_FOUND",
            Self::MissingInput { .. } => "MISSING_INPUT",
            Self::InvalidPattern { .. } => "INVALID_PATTERN",
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::Io { .. } => "IO_ERROR",
            Self::VersionNotFound { .. } => "VERSION_NOT_FOUND",
            Self::RegistryStatus { .. } => "REGISTRY_STATUS",
            Self::NetworkError { .. } => "NETWORK_ERROR",
            Self::MalformedIndex { .. } => "MALFORMED_INDEX",
            Self::PushFailed { .. } => "PUSH_FAILED",
            Self::VersionExists { .. } => "VERSION_EXISTS",
            Self::CommandError { .. } => "COMMAND_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_file_not_found_error() {
        let error = PublishError::ProjectFileNotFound {
            path: "src/Demo/Demo.csproj".to_string(),
        };

        assert_eq!(error.category(), ErrorCategory::Configuration);
        assert_eq!(error.code(), "PROJECT_FILE_NOT_FOUND");
        assert_eq!(error.to_string(), "project file not found: src/Demo/Demo.csproj");
        assert!(!error.suggested_actions().is_empty());
    }

    #[test]
    fn test_version_not_found_error() {
        let error = PublishError::VersionNotFound {
            path: "Demo.csproj".to_string(),
        };

        assert_eq!(error.category(), ErrorCategory::Extraction);
        assert_eq!(error.code(), "VERSION_NOT_FOUND");
        assert!(error.to_string().contains("unable to extract version info"));
    }

    #[test]
    fn test_registry_status_error_display() {
        let error = PublishError::RegistryStatus {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };

        assert_eq!(error.category(), ErrorCategory::Registry);
        assert_eq!(error.to_string(), "error: 503: Service Unavailable");
    }

    #[test]
    fn test_push_failed_surfaces_line_verbatim() {
        let error = PublishError::PushFailed {
            line: "error: Response status code does not indicate success: 403".to_string(),
        };

        assert_eq!(error.category(), ErrorCategory::Publish);
        assert_eq!(
            error.to_string(),
            "error: Response status code does not indicate success: 403"
        );
    }

    #[test]
    fn test_version_exists_error() {
        let error = PublishError::VersionExists {
            package: "Demo".to_string(),
            version: "1.2.3".to_string(),
        };

        assert_eq!(error.category(), ErrorCategory::DuplicateVersion);
        assert_eq!(error.to_string(), "error: Version 1.2.3 already exists");
        let actions = error.suggested_actions();
        assert!(actions.iter().any(|a| a.contains("THOW_ERROR_IF_VERSION_EXISTS")));
    }

    #[test]
    fn test_command_error() {
        let error = PublishError::CommandError {
            command: "dotnet".to_string(),
            message: "No such file or directory".to_string(),
        };

        assert_eq!(error.category(), ErrorCategory::Command);
        assert_eq!(error.code(), "COMMAND_ERROR");
        assert!(error.to_string().starts_with("[dotnet]"));
    }
}
