//! Diagnostics
//!
//! Error codes, reported diagnostics and the fatal transform error.

pub mod diagnostic;
pub mod error;
pub mod error_code;

pub use diagnostic::{Diagnostic, DiagnosticCategory};
pub use error::TransformError;
pub use error_code::{cm_error_code, ErrorCode};
