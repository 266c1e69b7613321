//! Infers the type of a raw operand string.
use crate::catalog::{Catalog, OperandType};

/// One or more ASCII digits and nothing else. No sign, no whitespace.
pub fn is_int_literal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Opens and closes with a double quote. The content is unconstrained.
pub fn is_string_literal(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('"') && s.ends_with('"')
}

/// Classifies an operand. Total: anything unrecognised is `Invalid`.
///
/// Precedence is integer literal, `Int` variable, string literal, `String`
/// variable. Catalogs reject variable names that read as literals, so a
/// variable always classifies as its declared type.
pub fn classify(catalog: &Catalog, operand: &str) -> OperandType {
    if is_int_literal(operand) {
        return OperandType::Int;
    }
    let declared = catalog.variable_type(operand);
    if declared == Some(OperandType::Int) {
        return OperandType::Int;
    }
    if is_string_literal(operand) {
        return OperandType::String;
    }
    if declared == Some(OperandType::String) {
        return OperandType::String;
    }
    OperandType::Invalid
}
