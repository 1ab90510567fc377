use oxc_allocator::Allocator;
use oxc_span::SourceType;
use tracing::debug;

use super::host::TransformHost;
use super::rewriter::remove_annotations;
use super::source::{generate_source, parse_source, source_type_for};
use crate::diagnostics::TransformError;
use crate::file_system::{AbsoluteFsPath, NativeFileSystem, ReadonlyFileSystem};
use crate::metadata::{locate_annotations, validate_record, AnnotationLocation, MetadataRecord};

/// Per-invocation settings.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Base directory for relative metadata paths, written to `env.context`.
    pub context: AbsoluteFsPath,
    /// Name used in diagnostics and to pick the grammar.
    pub file_name: Option<String>,
    pub source_type: SourceType,
}

impl TransformOptions {
    pub fn new(context: AbsoluteFsPath) -> Self {
        TransformOptions {
            context,
            file_name: None,
            source_type: source_type_for(None),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        self.source_type = source_type_for(Some(&file_name));
        self.file_name = Some(file_name);
        self
    }
}

/// Transform one source file against the native file system.
///
/// See [`transform_with_fs`].
pub fn transform<H: TransformHost + ?Sized>(
    source: &str,
    options: &TransformOptions,
    host: &mut H,
) -> Result<String, TransformError> {
    transform_with_fs(source, options, &NativeFileSystem::new(), host)
}

/// Strip the first `Metadata(...)` decorator from every class and emit its metadata.
///
/// Valid metadata is handed to `host.emit_file` as `<name>.component.json`; invalid
/// metadata is reported through `host.emit_error` and skipped. Either way the
/// decorator is removed. Returns the rewritten source, or the input unchanged when
/// no class carried the decorator. Only a parse failure is returned as an error.
pub fn transform_with_fs<F, H>(
    source: &str,
    options: &TransformOptions,
    fs: &F,
    host: &mut H,
) -> Result<String, TransformError>
where
    F: ReadonlyFileSystem + ?Sized,
    H: TransformHost + ?Sized,
{
    let file_name = options.file_name.as_deref().unwrap_or("<input>");
    let allocator = Allocator::default();
    let mut program = parse_source(&allocator, source, options.source_type, file_name)?;

    let annotations = locate_annotations(&program);
    if annotations.is_empty() {
        return Ok(source.to_string());
    }

    let locations: Vec<AnnotationLocation> =
        annotations.iter().map(|found| found.location).collect();
    remove_annotations(&mut program, &locations);

    // Everything is serialized before the host sees any of it, so a fatal error
    // leaves the host untouched.
    let mut outcomes = Vec::with_capacity(annotations.len());
    for found in annotations {
        let class_name = found.class_name.unwrap_or_default();
        let record = MetadataRecord::new(&class_name, found.argument, options.context.as_str());
        let outcome = match validate_record(&record, &class_name, fs) {
            Ok(()) => {
                let content =
                    record
                        .to_json_pretty()
                        .map_err(|source| TransformError::Serialize {
                            class_name: class_name.clone(),
                            source,
                        })?;
                Ok((record.artifact_name(), content))
            }
            Err(err) => Err(err),
        };
        outcomes.push((class_name, outcome));
    }

    for (class_name, outcome) in outcomes {
        match outcome {
            Ok((artifact, content)) => {
                debug!(file = file_name, class = %class_name, %artifact, "emitting metadata");
                host.emit_file(&artifact, content);
            }
            Err(err) => {
                debug!(file = file_name, class = %class_name, error = %err, "rejected metadata");
                host.emit_error(err.to_diagnostic(options.file_name.as_deref()));
            }
        }
    }

    Ok(generate_source(&program))
}
