//! Defines the verdict types for the type system module.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::OperandType;

/// The rule a formula violated. One kind per checker guard, in guard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorType {
    MissingField,
    LeftNotVariable,
    RightInvalidType,
    OperatorLeftTypeMismatch,
    OperatorRightTypeMismatch,
    OperatorIncompatibleTypes,
}

impl ValidationErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorType::MissingField => "MissingField",
            ValidationErrorType::LeftNotVariable => "LeftNotVariable",
            ValidationErrorType::RightInvalidType => "RightInvalidType",
            ValidationErrorType::OperatorLeftTypeMismatch => "OperatorLeftTypeMismatch",
            ValidationErrorType::OperatorRightTypeMismatch => "OperatorRightTypeMismatch",
            ValidationErrorType::OperatorIncompatibleTypes => "OperatorIncompatibleTypes",
        }
    }
}

/// A rejected formula: which rule failed and a message fit for display.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    pub error_type: ValidationErrorType,
    pub message: String,
}

/// `Ok(())` for a well-typed formula, otherwise the first violated rule.
pub type ValidationResult = Result<(), ValidationError>;

impl ValidationError {
    pub fn missing_field() -> Self {
        Self {
            error_type: ValidationErrorType::MissingField,
            message: "All fields are required.".into(),
        }
    }

    pub fn left_not_variable(left: &str) -> Self {
        Self {
            error_type: ValidationErrorType::LeftNotVariable,
            message: format!("Left operand '{}' must be a known variable.", left),
        }
    }

    pub fn right_invalid_type(right: &str) -> Self {
        Self {
            error_type: ValidationErrorType::RightInvalidType,
            message: format!("Right operand '{}' is neither a literal nor a known variable.", right),
        }
    }

    pub fn operator_left_mismatch(symbol: &str, left: &str, left_type: OperandType) -> Self {
        Self {
            error_type: ValidationErrorType::OperatorLeftTypeMismatch,
            message: format!(
                "Operator '{}' does not accept left operand '{}' of type {}.",
                symbol, left, left_type
            ),
        }
    }

    pub fn operator_right_mismatch(symbol: &str, right: &str, right_type: OperandType) -> Self {
        Self {
            error_type: ValidationErrorType::OperatorRightTypeMismatch,
            message: format!(
                "Operator '{}' does not accept right operand '{}' of type {}.",
                symbol, right, right_type
            ),
        }
    }

    pub fn operator_incompatible(
        symbol: &str,
        left: &str,
        left_type: OperandType,
        right: &str,
        right_type: OperandType,
    ) -> Self {
        Self {
            error_type: ValidationErrorType::OperatorIncompatibleTypes,
            message: format!(
                "Operator '{}' cannot compare '{}' ({}) with '{}' ({}).",
                symbol, left, left_type, right, right_type
            ),
        }
    }
}
