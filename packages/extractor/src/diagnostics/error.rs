use super::error_code::ErrorCode;
use thiserror::Error;

/// Failures that abort the transform of a whole source file.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Failed to parse {file}: {}", .messages.join("; "))]
    Parse { file: String, messages: Vec<String> },

    #[error("Failed to serialize metadata for class '{class_name}': {source}")]
    Serialize {
        class_name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TransformError {
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            TransformError::Parse { .. } => Some(ErrorCode::SourceParseFailure),
            TransformError::Serialize { .. } => None,
        }
    }
}
