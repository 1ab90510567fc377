use std::collections::HashMap;

use oxc_ast::ast::{Class, Program};
use oxc_ast_visit::{walk_mut, VisitMut};
use oxc_span::Span;

use crate::metadata::AnnotationLocation;

/// Remove the decorators at `locations` from their classes and return how many were removed.
///
/// Positions come from a previous read-only scan of the same program; classes are
/// identified by span, so nested classes are reached too. An empty decorator list
/// is how the AST spells "no decorators", so nothing is printed for a class that
/// lost its only one.
pub fn remove_annotations(program: &mut Program<'_>, locations: &[AnnotationLocation]) -> usize {
    let mut remover = AnnotationRemover {
        targets: locations
            .iter()
            .map(|location| (location.class, location.decorator))
            .collect(),
        removed: 0,
    };
    remover.visit_program(program);
    remover.removed
}

struct AnnotationRemover {
    targets: HashMap<Span, usize>,
    removed: usize,
}

impl<'a> VisitMut<'a> for AnnotationRemover {
    fn visit_class(&mut self, class: &mut Class<'a>) {
        if let Some(target) = self.targets.remove(&class.span) {
            if target < class.decorators.len() {
                let mut idx = 0;
                class.decorators.retain(|_| {
                    let keep = idx != target;
                    idx += 1;
                    keep
                });
                self.removed += 1;
            }
        }
        walk_mut::walk_class(self, class);
    }
}
