#![deny(clippy::all)]

use napi::{Error, Result};
use napi_derive::napi;

use component_metadata::file_system::{NativeFileSystem, PathManipulation};
use component_metadata::{transform_with_fs, CapturingHost, TransformOptions};

/// A metadata artifact produced for one decorated class.
#[napi(object)]
pub struct EmittedArtifact {
    /// `<name>.component.json`
    pub name: String,
    pub content: String,
}

#[napi(object)]
pub struct TransformOutput {
    /// The source without its `@Metadata` decorators.
    pub code: String,
    pub artifacts: Vec<EmittedArtifact>,
    /// Rejected metadata, one formatted diagnostic per class.
    pub errors: Vec<String>,
}

fn run(source: &str, context: &str, filename: Option<&str>) -> Result<TransformOutput> {
    let fs = NativeFileSystem::new();
    let mut options = TransformOptions::new(fs.resolve(&[context]));
    if let Some(filename) = filename {
        options = options.with_file_name(filename);
    }

    let mut host = CapturingHost::new();
    let code = transform_with_fs(source, &options, &fs, &mut host)
        .map_err(|e| Error::from_reason(e.to_string()))?;

    Ok(TransformOutput {
        code,
        artifacts: host
            .files
            .into_iter()
            .map(|file| EmittedArtifact {
                name: file.name,
                content: file.content,
            })
            .collect(),
        errors: host.diagnostics.iter().map(|d| d.to_string()).collect(),
    })
}

/// Strip `@Metadata` decorators from `source` and return the collected metadata.
///
/// Thumbnails are resolved against `context`. Throws on syntax errors.
#[napi]
pub fn transform(source: String, context: String, filename: Option<String>) -> Result<TransformOutput> {
    run(&source, &context, filename.as_deref())
}

/// Transformer bound to one context directory, for loaders that process many files.
#[napi]
pub struct MetadataTransformer {
    context: String,
}

#[napi]
impl MetadataTransformer {
    #[napi(constructor)]
    pub fn new(context: String) -> Self {
        MetadataTransformer { context }
    }

    #[napi(getter)]
    pub fn context(&self) -> String {
        self.context.clone()
    }

    #[napi]
    pub fn transform(&self, filename: String, source: String) -> Result<TransformOutput> {
        run(&source, &self.context, Some(&filename))
    }

    #[napi]
    pub fn version(&self) -> String {
        component_metadata::version().to_string()
    }
}
