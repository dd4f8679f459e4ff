//! Package descriptor - the unit of work of a publish run

use std::path::{Path, PathBuf};

/// One package's paths, name and version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    project_file: PathBuf,
    version_file: PathBuf,
    version: Option<String>,
    package_name: Option<String>,
}

impl PackageDescriptor {
    /// Create a descriptor; `version_file` defaults to `project_file`
    pub fn new<P: Into<PathBuf>>(
        project_file: P,
        version_file: Option<PathBuf>,
        version: Option<String>,
        package_name: Option<String>,
    ) -> Self {
        let project_file = project_file.into();
        let version_file = version_file.unwrap_or_else(|| project_file.clone());

        Self {
            project_file,
            version_file,
            version: version.filter(|v| !v.is_empty()),
            package_name: package_name.filter(|n| !n.is_empty()),
        }
    }

    /// Descriptor for a glob match: both paths point at the matched file
    pub fn from_match<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(path, None, None, None)
    }

    pub fn project_file(&self) -> &Path {
        &self.project_file
    }

    pub fn version_file(&self) -> &Path {
        &self.version_file
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Whether the version file is a separate file from the project file
    pub fn has_separate_version_file(&self) -> bool {
        self.version_file != self.project_file
    }

    /// Store an extracted version
    pub fn set_version(&mut self, version: String) {
        self.version = Some(version);
    }

    /// Package name, deriving it from the project file name on first use
    pub fn package_name(&mut self) -> &str {
        let project_file = &self.project_file;
        self.package_name
            .get_or_insert_with(|| derive_package_name(project_file))
    }

    /// Package name if already known
    pub fn package_name_opt(&self) -> Option<&str> {
        self.package_name.as_deref()
    }
}

/// Base file name without its last extension (`Foo.Bar.csproj` -> `Foo.Bar`)
pub fn derive_package_name(project_file: &Path) -> String {
    project_file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
