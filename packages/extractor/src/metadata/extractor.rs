//! Static destructuring of decorator arguments.
//!
//! Only literal syntax is read: strings, numbers, booleans, `null`, arrays and
//! object literals. Every other expression shape becomes [`MetadataValue::Null`];
//! nothing is ever evaluated.

use indexmap::IndexMap;
use oxc_ast::ast::{
    Argument, ArrayExpressionElement, Expression, ObjectExpression, ObjectPropertyKind,
    PropertyKey,
};

use super::value::{format_number, MetadataValue};

/// Extract the value of a call argument. A missing argument or a spread argument is null.
pub fn extract_argument(argument: Option<&Argument<'_>>) -> MetadataValue {
    match argument.and_then(|arg| arg.as_expression()) {
        Some(expr) => extract_expression(expr),
        None => MetadataValue::Null,
    }
}

/// Extract the value of a literal expression.
pub fn extract_expression(expr: &Expression<'_>) -> MetadataValue {
    match expr {
        Expression::StringLiteral(lit) => MetadataValue::String(lit.value.to_string()),
        Expression::NumericLiteral(lit) => MetadataValue::Number(lit.value),
        Expression::BooleanLiteral(lit) => MetadataValue::Bool(lit.value),
        Expression::NullLiteral(_) => MetadataValue::Null,
        Expression::ArrayExpression(array) => {
            MetadataValue::Array(array.elements.iter().map(extract_element).collect())
        }
        Expression::ObjectExpression(object) => MetadataValue::Object(extract_object(object)),
        Expression::ParenthesizedExpression(paren) => extract_expression(&paren.expression),
        _ => MetadataValue::Null,
    }
}

fn extract_element(element: &ArrayExpressionElement<'_>) -> MetadataValue {
    // Holes and spreads have no literal value.
    element
        .as_expression()
        .map(extract_expression)
        .unwrap_or(MetadataValue::Null)
}

fn extract_object(object: &ObjectExpression<'_>) -> IndexMap<String, MetadataValue> {
    let mut map = IndexMap::new();
    for property in &object.properties {
        let ObjectPropertyKind::ObjectProperty(prop) = property else {
            continue;
        };
        if prop.computed {
            continue;
        }
        if let Some(key) = property_key_name(&prop.key) {
            // Later duplicates overwrite the value in place.
            map.insert(key, extract_expression(&prop.value));
        }
    }
    map
}

fn property_key_name(key: &PropertyKey<'_>) -> Option<String> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.to_string()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.to_string()),
        PropertyKey::NumericLiteral(lit) => Some(format_number(lit.value)),
        _ => None,
    }
}
