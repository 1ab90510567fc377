#![deny(clippy::all)]

/**
 * Component Metadata
 *
 * Strips `@Metadata({...})` class decorators from JavaScript/JSX sources and
 * emits the metadata as `<name>.component.json` artifacts.
 */
pub mod config;
pub mod diagnostics;
pub mod file_system;
pub mod logging;
pub mod metadata;
pub mod perform_transform;
pub mod transform;

pub use diagnostics::{Diagnostic, ErrorCode, TransformError};
pub use transform::{
    transform, transform_with_fs, CapturingHost, EmittedFile, TransformHost, TransformOptions,
};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
