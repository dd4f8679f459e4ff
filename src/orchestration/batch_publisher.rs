//! Batch Publisher - runs every resolved package through the publisher
//!
//! Features:
//! - Local preparation of all packages before the first registry call
//! - Parallel registry work with concurrency control
//! - Every task is joined before the run reports its result
//! - Summary of outcomes per package

use super::package_publisher::{Collaborators, PackagePublisher, PublishReport};
use crate::core::config::ActionConfig;
use crate::core::descriptor::PackageDescriptor;
use crate::core::error::PublishError;
use crate::core::workflow;
use crate::manifest::{DescriptorResolver, ResolveRequest};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info};

/// Batch publish result
#[derive(Debug, Clone, Default)]
pub struct BatchPublishResult {
    /// Reports of packages that completed without error
    pub reports: Vec<PublishReport>,

    /// Failed packages with error messages
    pub failed: Vec<(String, String)>,

    /// Projects skipped by the packaging gate
    pub excluded: usize,
}

impl BatchPublishResult {
    pub fn success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// BatchPublisher - resolves, prepares and publishes all packages of a run
pub struct BatchPublisher {
    package_dir: PathBuf,
    resolver: DescriptorResolver,
    request: ResolveRequest,
    max_concurrency: usize,
    publisher: Arc<PackagePublisher>,
}

impl BatchPublisher {
    pub fn new(config: &ActionConfig, collaborators: Collaborators) -> Result<Self, PublishError> {
        Ok(Self {
            package_dir: config.working_dir.join(&config.package_path),
            resolver: DescriptorResolver::new(&config.working_dir),
            request: ResolveRequest {
                project_spec: config.project_file.clone(),
                version_spec: config.version_file.clone(),
                version: config.version_static.clone(),
                package_name: config.package_name.clone(),
            },
            max_concurrency: config.max_concurrency.max(1),
            publisher: Arc::new(PackagePublisher::new(config, collaborators)?),
        })
    }

    /// Run the whole batch
    ///
    /// Fails with the first failing package, but only after every started
    /// package has finished.
    pub async fn run(&self) -> Result<BatchPublishResult, PublishError> {
        if !self.package_dir.is_dir() {
            return Err(PublishError::PackageDirNotFound {
                path: self.package_dir.display().to_string(),
            });
        }

        let (prepared, excluded) = self.prepare_all()?;
        if prepared.is_empty() && excluded == 0 {
            workflow::warning(&format!(
                "no project files matched {}",
                self.request.project_spec
            ));
        }

        let (mut result, first_error) = self.publish_in_parallel(prepared).await;
        result.excluded = excluded;

        Self::print_summary(&result);

        match first_error {
            Some(e) => Err(e),
            None => Ok(result),
        }
    }

    /// Resolve descriptors and run every local check, failing fast
    fn prepare_all(&self) -> Result<(Vec<PackageDescriptor>, usize), PublishError> {
        let mut prepared = Vec::new();
        let mut excluded = 0;

        for descriptor in self.resolver.resolve(&self.request)? {
            match self.publisher.prepare(descriptor)? {
                Some(descriptor) => prepared.push(descriptor),
                None => excluded += 1,
            }
        }

        Ok((prepared, excluded))
    }

    /// Publish prepared packages in parallel with concurrency control
    async fn publish_in_parallel(
        &self,
        descriptors: Vec<PackageDescriptor>,
    ) -> (BatchPublishResult, Option<PublishError>) {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut tasks = Vec::with_capacity(descriptors.len());

        for descriptor in descriptors {
            let semaphore = Arc::clone(&semaphore);
            let publisher = Arc::clone(&self.publisher);
            let package = descriptor.package_name_opt().unwrap_or_default().to_string();

            let task = tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| PublishError::CommandError {
                        command: "publish".to_string(),
                        message: e.to_string(),
                    })?;
                publisher.process(descriptor).await
            });

            tasks.push((package, task));
        }

        let mut result = BatchPublishResult::default();
        let mut first_error = None;

        // Wait for all tasks; none is abandoned after a failure
        for (package, task) in tasks {
            let outcome = task.await.unwrap_or_else(|e| {
                Err(PublishError::CommandError {
                    command: "publish".to_string(),
                    message: format!("task failed: {}", e),
                })
            });

            match outcome {
                Ok(report) => {
                    info!(
                        "✅ {} {}: {}",
                        report.package_name,
                        report.version,
                        report.outcome.as_str()
                    );
                    result.reports.push(report);
                }
                Err(e) => {
                    error!("❌ {}: {}", package, e);
                    result.failed.push((package, e.to_string()));
                    first_error.get_or_insert(e);
                }
            }
        }

        (result, first_error)
    }

    fn print_summary(result: &BatchPublishResult) {
        info!(
            succeeded = result.reports.len(),
            failed = result.failed.len(),
            excluded = result.excluded,
            "📊 Publish summary: {}",
            if result.success() { "SUCCESS" } else { "FAILED" }
        );
    }
}
