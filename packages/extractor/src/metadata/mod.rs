//! Metadata extraction.
//!
//! Locating the `Metadata(...)` decorator on classes, destructuring its literal
//! argument into a [`MetadataValue`], and validating the resulting record.

pub mod extractor;
pub mod locator;
pub mod record;
pub mod validator;
pub mod value;

pub use extractor::{extract_argument, extract_expression};
pub use locator::{locate_annotations, AnnotationLocation, AnnotationMatch, METADATA_DECORATOR};
pub use record::MetadataRecord;
pub use validator::{validate_record, ValidationError};
pub use value::MetadataValue;
