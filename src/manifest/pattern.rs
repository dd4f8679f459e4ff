//! Capture extraction from semi-structured project files
//!
//! Callers only see "first captured value or nothing"; the regex behind it
//! can be replaced without touching them.

use crate::core::error::PublishError;
use regex::{Regex, RegexBuilder};

/// Group name that takes precedence over the first positional group
pub const VALUE_GROUP: &str = "value";

/// Compiled capture pattern
#[derive(Debug, Clone)]
pub struct CaptureExtractor {
    regex: Regex,
}

impl CaptureExtractor {
    /// Compile `pattern` in multi-line, CRLF-aware mode
    ///
    /// `name` identifies the input in error messages (e.g. `VERSION_REGEX`).
    pub fn new(name: &str, pattern: &str) -> Result<Self, PublishError> {
        let regex = RegexBuilder::new(pattern)
            .multi_line(true)
            .crlf(true)
            .build()
            .map_err(|e| PublishError::InvalidPattern {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        if regex.captures_len() < 2 {
            return Err(PublishError::InvalidPattern {
                name: name.to_string(),
                message: format!("`{}` has no capture group", pattern),
            });
        }

        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// First captured value in `text`
    ///
    /// A match whose group did not participate counts as no match.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.find(text).flatten()
    }

    /// First match in `text` and its captured value, if the group took part
    pub fn find<'t>(&self, text: &'t str) -> Option<Option<&'t str>> {
        let captures = self.regex.captures(text)?;
        Some(
            captures
                .name(VALUE_GROUP)
                .or_else(|| captures.get(1))
                .map(|m| m.as_str()),
        )
    }
}
