//! The static type checker for comparison formulas.
//!
//! A formula is `left operator right`. The `classifier` gives each operand a
//! type, and the `FormulaChecker` walks an ordered list of rules, reporting
//! only the first one the formula breaks.

// Publicly export the primary components for use by other modules.
pub use self::checker::{validate, FormulaChecker, TypedFormula};
pub use self::classifier::classify;
pub use self::error::{ValidationError, ValidationErrorType, ValidationResult};

// --- MODULE DECLARATIONS ---
pub mod classifier;
mod checker;
mod error;
mod rules {
    pub mod completeness;
    pub mod operands;
    pub mod operator;
}
