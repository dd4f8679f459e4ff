//! Tag Emitter - tags the published revision and reports it as `VERSION`

use crate::core::error::PublishError;
use crate::core::traits::{OutputSink, RevisionTagger};
use std::sync::Arc;
use tracing::info;

/// Name of the run output carrying the tag
pub const VERSION_OUTPUT: &str = "VERSION";

pub struct TagEmitter {
    format: String,
    tagger: Arc<dyn RevisionTagger>,
    outputs: Arc<dyn OutputSink>,
}

impl TagEmitter {
    pub fn new(
        format: impl Into<String>,
        tagger: Arc<dyn RevisionTagger>,
        outputs: Arc<dyn OutputSink>,
    ) -> Self {
        Self {
            format: format.into(),
            tagger,
            outputs,
        }
    }

    /// Tag name for `version`: the first `*` of the format is replaced
    pub fn tag_name(&self, version: &str) -> String {
        self.format.replacen('*', version, 1)
    }

    /// Create and push the tag, then publish it as the `VERSION` output
    pub async fn emit(&self, version: &str) -> Result<String, PublishError> {
        let tag = self.tag_name(version);
        info!("✨ creating new tag {}", tag);

        self.tagger
            .create_tag(&tag)
            .await
            .map_err(|e| command_error("git tag", e))?;
        self.tagger
            .push_tag(&tag)
            .await
            .map_err(|e| command_error("git push", e))?;
        self.outputs
            .set_output(VERSION_OUTPUT, &tag)
            .map_err(|e| command_error("set-output", e))?;

        Ok(tag)
    }
}

fn command_error(command: &str, error: anyhow::Error) -> PublishError {
    PublishError::CommandError {
        command: command.to_string(),
        message: format!("{:#}", error),
    }
}
