pub mod config;
pub mod config_loader;
pub mod descriptor;
pub mod error;
pub mod traits;
pub mod workflow;

pub use config::*;
pub use config_loader::*;
pub use descriptor::*;
pub use error::*;
pub use traits::*;
