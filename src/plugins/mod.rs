pub mod dotnet_plugin;
pub mod git_plugin;

pub use dotnet_plugin::DotnetCli;
pub use git_plugin::{GitTagger, TAG_REMOTE};
