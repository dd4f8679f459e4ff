pub mod core;
pub mod manifest;
pub mod orchestration;
pub mod plugins;
pub mod registry;
pub mod security;

pub use crate::core::*;
pub use orchestration::{BatchPublisher, Collaborators, PublishOutcome, PublishReport};
pub use security::{CommandError, SafeCommandExecutor, SecureTokenManager};
