//! Descriptor resolver - expands project path patterns into descriptors
//!
//! A plain project path yields exactly one descriptor. A glob is expanded
//! against the working tree lazily, in traversal order: directories are
//! skipped, hidden files are included and no ignore files are consulted.
//! `{a,b}` alternations are expanded before matching; extended globs such as
//! `!(Tests)` are rejected.

use crate::core::descriptor::PackageDescriptor;
use crate::core::error::PublishError;
use glob::{MatchOptions, Pattern};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

const EXTGLOB_OPENERS: [&str; 3] = ["!(", "+(", "@("];

const PROJECT_SPEC_INPUT: &str = "PROJECT_FILE_PATH";

/// Whether `spec` contains glob syntax
pub fn is_glob(spec: &str) -> bool {
    spec.chars().any(|c| matches!(c, '*' | '?' | '[' | '{'))
        || EXTGLOB_OPENERS.iter().any(|opener| spec.contains(opener))
}

/// Inputs of a resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveRequest {
    pub project_spec: String,
    pub version_spec: String,
    pub version: Option<String>,
    pub package_name: Option<String>,
}

/// Expands project path specifications into descriptors
#[derive(Debug, Clone)]
pub struct DescriptorResolver {
    working_dir: PathBuf,
}

impl DescriptorResolver {
    pub fn new<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Resolve `request` into a lazy descriptor sequence
    pub fn resolve(&self, request: &ResolveRequest) -> Result<Descriptors, PublishError> {
        if !is_glob(&request.project_spec) && !is_glob(&request.version_spec) {
            let version_file = if request.version_spec.is_empty() {
                None
            } else {
                Some(PathBuf::from(&request.version_spec))
            };

            return Ok(Descriptors::Single(Some(PackageDescriptor::new(
                &request.project_spec,
                version_file,
                request.version.clone(),
                request.package_name.clone(),
            ))));
        }

        GlobMatches::new(&self.working_dir, &request.project_spec).map(Descriptors::Matches)
    }
}

/// Lazy descriptor sequence produced by [`DescriptorResolver::resolve`]
pub enum Descriptors {
    Single(Option<PackageDescriptor>),
    Matches(GlobMatches),
}

impl Iterator for Descriptors {
    type Item = PackageDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Single(descriptor) => descriptor.take(),
            Self::Matches(matches) => matches.next(),
        }
    }
}

/// Files under the working tree matching a glob pattern
pub struct GlobMatches {
    patterns: Vec<Pattern>,
    base: PathBuf,
    walk_root: PathBuf,
    walker: walkdir::IntoIter,
}

impl GlobMatches {
    fn new(working_dir: &Path, spec: &str) -> Result<Self, PublishError> {
        let spec = spec.trim_start_matches("./");
        if let Some(opener) = EXTGLOB_OPENERS.iter().find(|opener| spec.contains(*opener)) {
            return Err(PublishError::InvalidPattern {
                name: PROJECT_SPEC_INPUT.to_string(),
                message: format!("extended glob `{}` is not supported in `{}`", opener, spec),
            });
        }

        let patterns = expand_braces(spec)
            .iter()
            .map(|alternative| {
                Pattern::new(alternative).map_err(|e| PublishError::InvalidPattern {
                    name: PROJECT_SPEC_INPUT.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let base = literal_base(spec);
        let walk_root = working_dir.join(&base);
        let walker = WalkDir::new(&walk_root).into_iter();

        Ok(Self {
            patterns,
            base,
            walk_root,
            walker,
        })
    }
}

impl Iterator for GlobMatches {
    type Item = PackageDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.walker.by_ref().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&self.walk_root) else {
                continue;
            };
            let candidate = self.base.join(relative);

            if self
                .patterns
                .iter()
                .any(|pattern| pattern.matches_path_with(&candidate, MATCH_OPTIONS))
            {
                return Some(PackageDescriptor::from_match(candidate));
            }
        }

        None
    }
}

/// Expand every `{a,b}` alternation in `spec` into one pattern per branch
///
/// Braces without a top-level comma, or without a closing brace, stay literal.
fn expand_braces(spec: &str) -> Vec<String> {
    let Some((open, close)) = find_alternation(spec) else {
        return vec![spec.to_string()];
    };

    let prefix = &spec[..open];
    let suffix = &spec[close + 1..];
    split_alternatives(&spec[open + 1..close])
        .into_iter()
        .flat_map(|branch| expand_braces(&format!("{}{}{}", prefix, branch, suffix)))
        .collect()
}

/// Byte offsets of the first balanced `{...}` holding a top-level comma
fn find_alternation(spec: &str) -> Option<(usize, usize)> {
    let bytes = spec.as_bytes();

    for open in (0..bytes.len()).filter(|&i| bytes[i] == b'{') {
        let mut depth = 0usize;
        let mut has_comma = false;

        for (offset, &byte) in bytes[open..].iter().enumerate() {
            match byte {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        if has_comma {
                            return Some((open, open + offset));
                        }
                        break;
                    }
                }
                b',' if depth == 1 => has_comma = true,
                _ => {}
            }
        }
    }

    None
}

/// Split a brace body on its top-level commas
fn split_alternatives(body: &str) -> Vec<&str> {
    let mut branches = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, byte) in body.bytes().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                branches.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    branches.push(&body[start..]);

    branches
}

/// Leading directory components of `spec` that contain no glob syntax
///
/// The final component is never part of the base, so a literal file path
/// walks its parent directory.
fn literal_base(spec: &str) -> PathBuf {
    let path = Path::new(spec);
    let components: Vec<Component<'_>> = path.components().collect();
    let mut base = PathBuf::new();

    for component in components.iter().take(components.len().saturating_sub(1)) {
        if is_glob(&component.as_os_str().to_string_lossy()) {
            break;
        }
        base.push(component);
    }

    base
}
