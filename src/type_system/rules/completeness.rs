//! Rule: every part of the formula must be filled in.
use crate::catalog::Operator;
use crate::formula::Formula;
use crate::type_system::error::ValidationError;

/// Unwraps the three parts of a formula. An empty operand is treated as not
/// yet filled in.
pub(crate) fn require_all<'a>(
    formula: &Formula<'a>,
) -> Result<(&'a str, &'a Operator, &'a str), ValidationError> {
    let filled = |s: Option<&'a str>| s.filter(|s| !s.is_empty());
    match (filled(formula.left), formula.operator, filled(formula.right)) {
        (Some(left), Some(op), Some(right)) => Ok((left, op, right)),
        _ => Err(ValidationError::missing_field()),
    }
}
