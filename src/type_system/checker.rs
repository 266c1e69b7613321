//! The central checker that runs the formula rules in order.
use super::error::{ValidationError, ValidationResult};
use super::rules::{completeness, operands, operator};
use crate::catalog::{Catalog, OperandType};
use crate::formula::Formula;

/// The inferred operand types of a formula that passed every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedFormula {
    pub left_type: OperandType,
    pub right_type: OperandType,
}

/// Checks formula snapshots against a catalog.
///
/// Holds nothing but the catalog reference, so one checker can serve any
/// number of snapshots and the same snapshot always gets the same verdict.
#[derive(Debug, Clone, Copy)]
pub struct FormulaChecker<'a> {
    catalog: &'a Catalog,
}

impl<'a> FormulaChecker<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Returns `Ok(())` or the error of the first rule the formula breaks.
    pub fn check(&self, formula: &Formula<'_>) -> ValidationResult {
        self.check_and_infer(formula).map(|_| ())
    }

    /// Like `check`, but also returns the inferred operand types on success.
    ///
    /// Rules run in a fixed order and stop at the first failure:
    /// 1. all three parts are present;
    /// 2. the left operand names a variable;
    /// 3. the right operand has a type;
    /// 4. some admissible pair takes the left type;
    /// 5. some admissible pair takes the right type;
    /// 6. some admissible pair takes both together.
    pub fn check_and_infer(&self, formula: &Formula<'_>) -> Result<TypedFormula, ValidationError> {
        let verdict = self.run_rules(formula);
        match &verdict {
            Ok(typed) => tracing::debug!(
                left_type = %typed.left_type,
                right_type = %typed.right_type,
                "formula accepted"
            ),
            Err(e) => tracing::debug!(rule = e.error_type.as_str(), "formula rejected: {}", e.message),
        }
        verdict
    }

    fn run_rules(&self, formula: &Formula<'_>) -> Result<TypedFormula, ValidationError> {
        let (left, op, right) = completeness::require_all(formula)?;

        let left_type = operands::infer_left(self.catalog, left)?;
        let right_type = operands::infer_right(self.catalog, right)?;

        operator::validate_left(op, left, left_type)?;
        operator::validate_right(op, right, right_type)?;
        operator::validate_pair(op, (left, left_type), (right, right_type))?;

        Ok(TypedFormula { left_type, right_type })
    }
}

/// Checks one snapshot against `catalog`.
pub fn validate(catalog: &Catalog, formula: &Formula<'_>) -> ValidationResult {
    FormulaChecker::new(catalog).check(formula)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuiltinOperator, Operator, TypePair};
    use crate::type_system::error::ValidationErrorType;
    use rstest::rstest;

    fn kind_of(left: Option<&str>, symbol: Option<&str>, right: Option<&str>) -> Option<ValidationErrorType> {
        let catalog = Catalog::builtin();
        let operator = symbol.map(|s| catalog.operator(s).unwrap());
        let formula = Formula { left, operator, right };
        validate(&catalog, &formula).err().map(|e| e.error_type)
    }

    #[rstest]
    #[case(Some("transaction.amount"), Some("≥"), Some("25"), None)]
    #[case(Some("25"), Some("≥"), Some("transaction.amount"), Some(ValidationErrorType::LeftNotVariable))]
    #[case(Some("transaction.amount"), Some("≥"), Some("\"abc\""), Some(ValidationErrorType::OperatorRightTypeMismatch))]
    #[case(Some("transaction.sender.last_name"), Some("≥"), Some("transaction.receiver.last_name"), Some(ValidationErrorType::OperatorLeftTypeMismatch))]
    #[case(Some("account.balance"), Some("="), Some("\"abc\""), Some(ValidationErrorType::OperatorIncompatibleTypes))]
    #[case(Some(""), None, Some("25"), Some(ValidationErrorType::MissingField))]
    #[case(Some("transaction.amount"), Some("≥"), Some("account.balance"), None)]
    #[case(Some("transaction.currency"), Some("="), Some("\"EUR\""), None)]
    #[case(Some("transaction.sender.first_name"), Some("is_close_match"), Some("transaction.receiver.first_name"), None)]
    #[case(Some("transaction.amount"), Some("≠"), Some("0"), None)]
    #[case(Some("transaction.amount"), Some("≥"), Some("-1"), Some(ValidationErrorType::RightInvalidType))]
    #[case(Some("transaction.amount"), Some("≥"), Some("unknown.field"), Some(ValidationErrorType::RightInvalidType))]
    #[case(Some("\"abc\""), Some("="), Some("\"abc\""), Some(ValidationErrorType::LeftNotVariable))]
    #[case(Some("transaction.amount"), Some("is_close_match"), Some("\"abc\""), Some(ValidationErrorType::OperatorLeftTypeMismatch))]
    #[case(Some("transaction.currency"), Some("is_close_match"), Some("42"), Some(ValidationErrorType::OperatorRightTypeMismatch))]
    #[case(None, Some("≥"), Some("25"), Some(ValidationErrorType::MissingField))]
    #[case(Some("transaction.amount"), None, Some("25"), Some(ValidationErrorType::MissingField))]
    #[case(Some("transaction.amount"), Some("≥"), None, Some(ValidationErrorType::MissingField))]
    #[case(Some("transaction.amount"), Some("≥"), Some(""), Some(ValidationErrorType::MissingField))]
    fn test_rules(
        #[case] left: Option<&str>,
        #[case] symbol: Option<&str>,
        #[case] right: Option<&str>,
        #[case] expected: Option<ValidationErrorType>,
    ) {
        assert_eq!(kind_of(left, symbol, right), expected);
    }

    #[test]
    fn test_earliest_rule_wins() {
        // Left literal with no operator: completeness is reported, not the literal.
        assert_eq!(kind_of(Some("25"), None, Some("\"x\"")), Some(ValidationErrorType::MissingField));
        // Left literal and invalid right: the left rule comes first.
        assert_eq!(kind_of(Some("25"), Some("≥"), Some("???")), Some(ValidationErrorType::LeftNotVariable));
        // Invalid right under an operator that rejects the left type: the right rule comes first.
        assert_eq!(
            kind_of(Some("transaction.currency"), Some("≥"), Some("???")),
            Some(ValidationErrorType::RightInvalidType)
        );
        // Both sides rejected by the operator: the left side is named.
        assert_eq!(
            kind_of(Some("transaction.currency"), Some("≥"), Some("\"x\"")),
            Some(ValidationErrorType::OperatorLeftTypeMismatch)
        );
    }

    #[test]
    fn test_pair_rule_with_custom_operator() {
        let catalog = Catalog::builtin();
        let op = Operator::new(
            "matches",
            [TypePair(OperandType::Int, OperandType::Int), TypePair(OperandType::String, OperandType::String)],
        );
        let formula = Formula::new("transaction.amount", &op, "transaction.sender.last_name");
        let err = validate(&catalog, &formula).unwrap_err();
        assert_eq!(err.error_type, ValidationErrorType::OperatorIncompatibleTypes);
        assert_eq!(
            err.message,
            "Operator 'matches' cannot compare 'transaction.amount' (Int) with 'transaction.sender.last_name' (String)."
        );
    }

    #[test]
    fn test_messages_name_operands_and_types() {
        let catalog = Catalog::builtin();
        let ge = BuiltinOperator::GreaterOrEqual.to_operator();
        let checker = FormulaChecker::new(&catalog);

        let err = checker.check(&Formula::new("transaction.amount", &ge, "\"abc\"")).unwrap_err();
        assert_eq!(err.message, "Operator '≥' does not accept right operand '\"abc\"' of type String.");

        let err = checker
            .check(&Formula::new("transaction.sender.last_name", &ge, "transaction.receiver.last_name"))
            .unwrap_err();
        assert_eq!(
            err.message,
            "Operator '≥' does not accept left operand 'transaction.sender.last_name' of type String."
        );

        let err = checker.check(&Formula::new("25", &ge, "transaction.amount")).unwrap_err();
        assert_eq!(err.message, "Left operand '25' must be a known variable.");

        let err = checker.check(&Formula::new("transaction.amount", &ge, "x")).unwrap_err();
        assert_eq!(err.message, "Right operand 'x' is neither a literal nor a known variable.");

        let err = checker.check(&Formula::default()).unwrap_err();
        assert_eq!(err.message, "All fields are required.");
        assert_eq!(err.to_string(), "All fields are required.");
    }

    #[test]
    fn test_check_and_infer_types() {
        let catalog = Catalog::builtin();
        let eq = BuiltinOperator::Equal.to_operator();
        let typed = FormulaChecker::new(&catalog)
            .check_and_infer(&Formula::new("transaction.currency", &eq, "transaction.receiver.last_name"))
            .unwrap();
        assert_eq!(typed, TypedFormula { left_type: OperandType::String, right_type: OperandType::String });
    }

    #[test]
    fn test_repeated_checks_agree() {
        let catalog = Catalog::builtin();
        let checker = FormulaChecker::new(&catalog);
        let ge = BuiltinOperator::GreaterOrEqual.to_operator();
        let formula = Formula::new("account.balance", &ge, "\"1\"");
        let first = checker.check(&formula);
        for _ in 0..5 {
            assert_eq!(checker.check(&formula), first);
        }
    }
}
