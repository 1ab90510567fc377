use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::diagnostics::TransformError;

/// Grammar for a file: derived from its extension, JSX enabled for JavaScript.
/// Without a usable name, JavaScript with JSX.
pub fn source_type_for(file_name: Option<&str>) -> SourceType {
    let source_type = file_name
        .and_then(|name| SourceType::from_path(name).ok())
        .unwrap_or_else(SourceType::jsx);
    if source_type.is_typescript() {
        source_type
    } else {
        source_type.with_jsx(true)
    }
}

/// Parse `source` into a program living in `allocator`.
pub fn parse_source<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    source_type: SourceType,
    file_name: &str,
) -> Result<Program<'a>, TransformError> {
    let ret = Parser::new(allocator, source, source_type).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let mut messages: Vec<String> = ret.errors.iter().map(|error| error.to_string()).collect();
        if messages.is_empty() {
            messages.push("unrecoverable syntax error".to_string());
        }
        return Err(TransformError::Parse {
            file: file_name.to_string(),
            messages,
        });
    }

    Ok(ret.program)
}

/// Print a program back to source text.
pub fn generate_source(program: &Program<'_>) -> String {
    Codegen::new().build(program).code
}
