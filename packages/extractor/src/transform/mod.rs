//! The metadata transform.
//!
//! Parse -> locate `Metadata(...)` -> extract -> strip -> validate -> emit -> print.

pub mod host;
pub mod pipeline;
pub mod rewriter;
pub mod source;

pub use host::{CapturingHost, EmittedFile, TransformHost};
pub use pipeline::{transform, transform_with_fs, TransformOptions};
pub use rewriter::remove_annotations;
pub use source::{generate_source, parse_source, source_type_for};
