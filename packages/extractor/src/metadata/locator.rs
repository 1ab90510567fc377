//! Finding `Metadata(...)` decorators on classes.
//!
//! The scan is read-only: it walks every class in the program, at any depth, and
//! reports where each match sits so the rewrite can happen afterwards in a
//! separate pass.

use oxc_ast::ast::{Argument, Class, Decorator, Expression, Program};
use oxc_ast_visit::{walk, Visit};
use oxc_span::Span;

use super::extractor::extract_argument;
use super::value::MetadataValue;

/// Name of the recognized decorator.
pub const METADATA_DECORATOR: &str = "Metadata";

/// Where a matched decorator sits: the span of the class carrying it and the
/// decorator's index in that class's decorator list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnotationLocation {
    pub class: Span,
    pub decorator: usize,
}

/// The first `Metadata(...)` decorator of one class, with its argument already
/// destructured.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationMatch {
    pub location: AnnotationLocation,
    /// `None` for anonymous classes (`export default class {}`, class expressions).
    pub class_name: Option<String>,
    /// Null for `Metadata()`.
    pub argument: MetadataValue,
}

/// Find the first `Metadata(...)` decorator of every class, in source order.
///
/// Classes nested in functions, blocks, methods or expressions are included.
pub fn locate_annotations(program: &Program<'_>) -> Vec<AnnotationMatch> {
    let mut collector = AnnotationCollector::default();
    collector.visit_program(program);
    collector.matches
}

#[derive(Default)]
struct AnnotationCollector {
    matches: Vec<AnnotationMatch>,
}

impl<'a> Visit<'a> for AnnotationCollector {
    fn visit_class(&mut self, class: &Class<'a>) {
        if let Some((decorator, argument)) = find_metadata_decorator(&class.decorators) {
            self.matches.push(AnnotationMatch {
                location: AnnotationLocation {
                    class: class.span,
                    decorator,
                },
                class_name: class.id.as_ref().map(|id| id.name.to_string()),
                argument: extract_argument(argument),
            });
        }
        walk::walk_class(self, class);
    }
}

/// Index and first argument of the first decorator that calls `Metadata` directly.
pub fn find_metadata_decorator<'p, 'a>(
    decorators: &'p [Decorator<'a>],
) -> Option<(usize, Option<&'p Argument<'a>>)> {
    decorators
        .iter()
        .enumerate()
        .find_map(|(idx, decorator)| match &decorator.expression {
            Expression::CallExpression(call) => match &call.callee {
                Expression::Identifier(ident) if ident.name == METADATA_DECORATOR => {
                    Some((idx, call.arguments.first()))
                }
                _ => None,
            },
            _ => None,
        })
}
