//! NuGet registry addressing and version index lookups

pub mod index;
pub mod kind;

pub use index::{RegistryIndexClient, classification_error};
pub use kind::{GITHUB_PACKAGES_PREFIX, RegistryKind, SOURCE_NAME};
