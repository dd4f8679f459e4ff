//! Project file inspection: descriptor resolution, packaging eligibility and
//! version extraction.

pub mod eligibility;
pub mod pattern;
pub mod resolver;
pub mod version;

pub use eligibility::{Eligibility, PackableGate};
pub use pattern::CaptureExtractor;
pub use resolver::{DescriptorResolver, Descriptors, ResolveRequest, is_glob};
pub use version::{ExtractedVersion, VersionExtractor};

use crate::core::error::PublishError;
use std::path::{Path, PathBuf};

/// Shared MSBuild properties file consulted when a project file has no match
pub const SIBLING_PROPS_FILE: &str = "Directory.Build.props";

/// `Directory.Build.props` in the same directory as `file`
pub fn sibling_props(file: &Path) -> PathBuf {
    file.parent()
        .unwrap_or_else(|| Path::new(""))
        .join(SIBLING_PROPS_FILE)
}

pub(crate) fn read_text(path: &Path) -> Result<String, PublishError> {
    std::fs::read_to_string(path).map_err(|e| PublishError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_props() {
        assert_eq!(
            sibling_props(Path::new("src/Demo/Demo.csproj")),
            PathBuf::from("src/Demo/Directory.Build.props")
        );
        assert_eq!(
            sibling_props(Path::new("Demo.csproj")),
            PathBuf::from("Directory.Build.props")
        );
    }
}
