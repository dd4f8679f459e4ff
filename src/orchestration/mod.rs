//! Orchestration layer for package publishing
//!
//! This module provides the high-level components that drive a publish run
//! from resolved project files to pushed packages and release tags.

pub mod batch_publisher;
pub mod package_publisher;
pub mod tag_emitter;

// Re-export main types for convenience
pub use batch_publisher::{BatchPublishResult, BatchPublisher};
pub use package_publisher::{Collaborators, PackagePublisher, PublishOutcome, PublishReport};
pub use tag_emitter::{TagEmitter, VERSION_OUTPUT};
