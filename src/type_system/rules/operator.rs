//! Rules matching operand types against an operator's admissible pairs.
//!
//! The side checks run first so the message can point at the offending
//! operand. They are not sufficient on their own: `=` admits `(Int, Int)` and
//! `(String, String)`, so an `Int` left and a `String` right each pass their
//! side check while no single pair covers both. `validate_pair` catches that.
use crate::catalog::{OperandType, Operator};
use crate::type_system::error::ValidationError;

pub(crate) fn validate_left(
    op: &Operator,
    left: &str,
    left_type: OperandType,
) -> Result<(), ValidationError> {
    if op.accepts_left(left_type) {
        Ok(())
    } else {
        Err(ValidationError::operator_left_mismatch(&op.symbol, left, left_type))
    }
}

pub(crate) fn validate_right(
    op: &Operator,
    right: &str,
    right_type: OperandType,
) -> Result<(), ValidationError> {
    if op.accepts_right(right_type) {
        Ok(())
    } else {
        Err(ValidationError::operator_right_mismatch(&op.symbol, right, right_type))
    }
}

pub(crate) fn validate_pair(
    op: &Operator,
    (left, left_type): (&str, OperandType),
    (right, right_type): (&str, OperandType),
) -> Result<(), ValidationError> {
    if op.accepts(left_type, right_type) {
        Ok(())
    } else {
        Err(ValidationError::operator_incompatible(
            &op.symbol, left, left_type, right, right_type,
        ))
    }
}
