use thiserror::Error;

use super::record::MetadataRecord;
use crate::diagnostics::{Diagnostic, ErrorCode};
use crate::file_system::ReadonlyFileSystem;

/// Why a class's metadata was rejected. Scoped to that class only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Metadata for class '{class_name}' is missing a non-empty string 'name'")]
    MissingName { class_name: String },

    #[error("Metadata for class '{class_name}' is missing required field 'thumbnail'")]
    MissingThumbnail { class_name: String },

    #[error("Thumbnail for class '{class_name}' does not exist: {path}")]
    ThumbnailNotFound { class_name: String, path: String },
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingName { .. } => ErrorCode::MetadataMissingName,
            ValidationError::MissingThumbnail { .. } => ErrorCode::MetadataMissingThumbnail,
            ValidationError::ThumbnailNotFound { .. } => ErrorCode::ThumbnailNotFound,
        }
    }

    pub fn class_name(&self) -> &str {
        match self {
            ValidationError::MissingName { class_name }
            | ValidationError::MissingThumbnail { class_name }
            | ValidationError::ThumbnailNotFound { class_name, .. } => class_name,
        }
    }

    pub fn to_diagnostic(&self, file: Option<&str>) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string())
            .with_file(file)
            .with_class_name(self.class_name())
    }
}

/// Check `record` against the required-field rules. The first failing rule wins.
///
/// `class_name` is the identifier of the decorated class and only labels errors;
/// anonymous classes are reported as `<anonymous>`.
pub fn validate_record<F: ReadonlyFileSystem + ?Sized>(
    record: &MetadataRecord,
    class_name: &str,
    fs: &F,
) -> Result<(), ValidationError> {
    let class_name = if class_name.is_empty() {
        "<anonymous>"
    } else {
        class_name
    };

    if record.name().map_or(true, str::is_empty) {
        return Err(ValidationError::MissingName {
            class_name: class_name.to_string(),
        });
    }

    let thumbnail = match record.thumbnail().and_then(|value| value.as_str()) {
        Some(thumbnail) if !thumbnail.is_empty() => thumbnail,
        _ => {
            return Err(ValidationError::MissingThumbnail {
                class_name: class_name.to_string(),
            })
        }
    };

    let path = fs.resolve(&[record.context(), thumbnail]);
    if !fs.exists(&path) {
        return Err(ValidationError::ThumbnailNotFound {
            class_name: class_name.to_string(),
            path: path.into_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_system::testing::MockFileSystem;
    use crate::metadata::MetadataValue;

    fn record(class_name: &str, entries: Vec<(&str, MetadataValue)>) -> MetadataRecord {
        let extracted = MetadataValue::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        );
        MetadataRecord::new(class_name, extracted, "/project/src")
    }

    fn fs() -> MockFileSystem {
        let fs = MockFileSystem::new_posix();
        fs.init_with_files(vec![("/project/src/img/card.png", "png")]);
        fs
    }

    #[test]
    fn accepts_existing_thumbnail() {
        let rec = record("Card", vec![("thumbnail", MetadataValue::from("./img/card.png"))]);
        assert_eq!(validate_record(&rec, "Card", &fs()), Ok(()));
    }

    #[test]
    fn rejects_empty_name_before_thumbnail() {
        let rec = record("", vec![]);
        let err = validate_record(&rec, "", &fs()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingName {
                class_name: "<anonymous>".to_string()
            }
        );
        assert_eq!(err.code(), ErrorCode::MetadataMissingName);

        let rec = record("Card", vec![("name", MetadataValue::Number(1.0))]);
        assert!(matches!(
            validate_record(&rec, "Card", &fs()),
            Err(ValidationError::MissingName { .. })
        ));
    }

    #[test]
    fn rejects_missing_null_empty_or_non_string_thumbnail() {
        for thumbnail in [
            None,
            Some(MetadataValue::Null),
            Some(MetadataValue::from("")),
            Some(MetadataValue::Number(3.0)),
        ] {
            let mut entries = vec![("description", MetadataValue::from("A card"))];
            if let Some(value) = thumbnail {
                entries.push(("thumbnail", value));
            }
            let err = validate_record(&record("Card", entries), "Card", &fs()).unwrap_err();
            assert_eq!(
                err,
                ValidationError::MissingThumbnail {
                    class_name: "Card".to_string()
                }
            );
        }
    }

    #[test]
    fn reports_resolved_path_of_missing_thumbnail() {
        let rec = record("Card", vec![("thumbnail", MetadataValue::from("./missing.png"))]);
        let err = validate_record(&rec, "Card", &fs()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ThumbnailNotFound {
                class_name: "Card".to_string(),
                path: "/project/src/missing.png".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Thumbnail for class 'Card' does not exist: /project/src/missing.png"
        );
    }

    #[test]
    fn diagnostics_carry_code_file_and_class() {
        let rec = record("Card", vec![]);
        let diag = validate_record(&rec, "Card", &fs())
            .unwrap_err()
            .to_diagnostic(Some("src/Card.jsx"));
        assert_eq!(diag.code, ErrorCode::MetadataMissingThumbnail);
        assert_eq!(diag.file.as_deref(), Some("src/Card.jsx"));
        assert_eq!(diag.class_name.as_deref(), Some("Card"));
    }
}
