//! Project configuration.

pub mod project;

pub use project::{ProjectConfig, ProjectOptions, DEFAULT_CONFIG_FILE};
