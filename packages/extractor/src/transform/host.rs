use crate::diagnostics::Diagnostic;

/// Capabilities the build orchestrator lends to one transform invocation.
pub trait TransformHost {
    /// Schedule a named text artifact for output.
    fn emit_file(&mut self, name: &str, content: String);

    /// Record a non-fatal diagnostic. Must not interrupt the transform.
    fn emit_error(&mut self, diagnostic: Diagnostic);
}

/// A named text artifact handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub name: String,
    pub content: String,
}

/// A host that keeps everything it is given, in emission order.
#[derive(Debug, Clone, Default)]
pub struct CapturingHost {
    pub files: Vec<EmittedFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CapturingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self, name: &str) -> Option<&EmittedFile> {
        self.files.iter().find(|file| file.name == name)
    }
}

impl TransformHost for CapturingHost {
    fn emit_file(&mut self, name: &str, content: String) {
        self.files.push(EmittedFile {
            name: name.to_string(),
            content,
        });
    }

    fn emit_error(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
