//! Rules inferring the type of each operand.
use crate::catalog::{Catalog, OperandType};
use crate::type_system::classifier::classify;
use crate::type_system::error::ValidationError;

/// The left side must name a variable. A literal is rejected even when it
/// would type-check.
pub(crate) fn infer_left(catalog: &Catalog, left: &str) -> Result<OperandType, ValidationError> {
    catalog
        .variable_type(left)
        .ok_or_else(|| ValidationError::left_not_variable(left))
}

/// The right side may be a variable or a literal, but must have a type.
pub(crate) fn infer_right(catalog: &Catalog, right: &str) -> Result<OperandType, ValidationError> {
    match classify(catalog, right) {
        OperandType::Invalid => Err(ValidationError::right_invalid_type(right)),
        t => Ok(t),
    }
}
