//! Packaging eligibility gate
//!
//! A project opts out of publishing by declaring `<IsPackable>false</IsPackable>`
//! (or whatever the packable pattern captures) in its project file, or in the
//! shared `Directory.Build.props` next to it.

use super::pattern::CaptureExtractor;
use super::{read_text, sibling_props};
use crate::core::error::PublishError;
use std::path::Path;

/// Gate decision for one project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Included,
    Excluded,
}

/// Decides whether a project is packaged at all
#[derive(Debug, Clone)]
pub struct PackableGate {
    extractor: CaptureExtractor,
}

impl PackableGate {
    pub fn new(extractor: CaptureExtractor) -> Self {
        Self { extractor }
    }

    /// Evaluate the gate for `project_file`
    ///
    /// Only a captured literal `false` excludes the project; no match at all,
    /// or any other captured value, includes it. Any match in the project file,
    /// even one whose group is empty, settles the decision there.
    pub fn evaluate(&self, project_file: &Path) -> Result<Eligibility, PublishError> {
        let content = read_text(project_file)?;
        let captured = match self.extractor.find(&content) {
            Some(value) => value.map(str::to_string),
            None => {
                let props = sibling_props(project_file);
                if props.is_file() {
                    let props_content = read_text(&props)?;
                    self.extractor.capture(&props_content).map(str::to_string)
                } else {
                    None
                }
            }
        };

        match captured.as_deref() {
            Some("false") => Ok(Eligibility::Excluded),
            _ => Ok(Eligibility::Included),
        }
    }
}
