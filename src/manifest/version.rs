//! Version extraction with `Directory.Build.props` fallback

use super::pattern::CaptureExtractor;
use super::{read_text, sibling_props};
use crate::core::error::PublishError;
use std::path::{Path, PathBuf};

/// Extracted version and the file it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedVersion {
    pub version: String,
    pub source: PathBuf,
}

/// Pulls a version string out of a version file
#[derive(Debug, Clone)]
pub struct VersionExtractor {
    extractor: CaptureExtractor,
}

impl VersionExtractor {
    pub fn new(extractor: CaptureExtractor) -> Self {
        Self { extractor }
    }

    pub fn pattern(&self) -> &str {
        self.extractor.as_str()
    }

    /// Extract the version from `version_file`
    ///
    /// The sibling `Directory.Build.props` is consulted only when the version
    /// file itself has no match.
    pub fn extract(&self, version_file: &Path) -> Result<ExtractedVersion, PublishError> {
        let content = read_text(version_file)?;
        if let Some(version) = self.extractor.capture(&content) {
            return Ok(ExtractedVersion {
                version: version.to_string(),
                source: version_file.to_path_buf(),
            });
        }

        let props = sibling_props(version_file);
        if props.is_file() {
            let props_content = read_text(&props)?;
            if let Some(version) = self.extractor.capture(&props_content) {
                return Ok(ExtractedVersion {
                    version: version.to_string(),
                    source: props,
                });
            }
        }

        Err(PublishError::VersionNotFound {
            path: version_file.display().to_string(),
        })
    }
}
