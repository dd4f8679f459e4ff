//! Git Plugin - release tag creation and push

use crate::core::traits::RevisionTagger;
use crate::security::SafeCommandExecutor;
use async_trait::async_trait;
use std::sync::Arc;

/// Remote tags are pushed to
pub const TAG_REMOTE: &str = "origin";

/// `git` CLI tagger
pub struct GitTagger {
    executor: Arc<SafeCommandExecutor>,
}

impl GitTagger {
    pub fn new(executor: Arc<SafeCommandExecutor>) -> Self {
        Self { executor }
    }

    async fn run(&self, args: &[&str]) -> anyhow::Result<()> {
        let output = self.executor.execute_inherited("git", args).await?;
        if !output.success {
            anyhow::bail!(
                "git {} exited with {}",
                args.join(" "),
                output
                    .code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string())
            );
        }
        Ok(())
    }
}

#[async_trait]
impl RevisionTagger for GitTagger {
    async fn create_tag(&self, tag: &str) -> anyhow::Result<()> {
        self.run(&["tag", tag]).await
    }

    async fn push_tag(&self, tag: &str) -> anyhow::Result<()> {
        self.run(&["push", TAG_REMOTE, tag]).await
    }
}
