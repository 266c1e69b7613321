//! Gate between a checked draft and whatever the host does with it.
use crate::catalog::{Catalog, CatalogError};
use crate::formula::FormulaDraft;
use crate::type_system::{FormulaChecker, ValidationError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Whether a draft with a failing verdict may still be submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPolicy {
    /// Accept every draft and record its verdict alongside it.
    Permissive,
    /// Accept only drafts that pass every rule.
    #[default]
    RequireValid,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown submission policy '{0}'")]
pub struct UnknownPolicy(pub String);

impl FromStr for SubmissionPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(SubmissionPolicy::Permissive),
            "require_valid" | "strict" => Ok(SubmissionPolicy::RequireValid),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Formula rejected: {0}")]
    Invalid(#[source] ValidationError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A draft that made it through the gate, with the verdict it was submitted under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub draft: FormulaDraft,
    pub verdict: Option<ValidationError>,
}

impl Submission {
    pub fn is_valid(&self) -> bool {
        self.verdict.is_none()
    }
}

/// Checks `draft` and applies `policy`. Accepted drafts are logged.
pub fn submit(
    catalog: &Catalog,
    draft: FormulaDraft,
    policy: SubmissionPolicy,
) -> Result<Submission, SubmissionError> {
    let verdict = {
        let formula = draft.resolve(catalog)?;
        FormulaChecker::new(catalog).check(&formula).err()
    };

    match (&verdict, policy) {
        (Some(err), SubmissionPolicy::RequireValid) => {
            tracing::warn!(rule = err.error_type.as_str(), "submission blocked: {}", err.message);
            Err(SubmissionError::Invalid(err.clone()))
        }
        (Some(err), SubmissionPolicy::Permissive) => {
            tracing::warn!(
                left = ?draft.left,
                operator = ?draft.operator,
                right = ?draft.right,
                rule = err.error_type.as_str(),
                "submitting formula that failed validation"
            );
            let verdict = Some(err.clone());
            Ok(Submission { draft, verdict })
        }
        (None, _) => {
            tracing::info!(left = ?draft.left, operator = ?draft.operator, right = ?draft.right, "formula submitted");
            Ok(Submission { draft, verdict: None })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_system::ValidationErrorType;
    use rstest::rstest;

    fn draft(left: &str, op: &str, right: &str) -> FormulaDraft {
        FormulaDraft { left: Some(left.into()), operator: Some(op.into()), right: Some(right.into()) }
    }

    #[rstest]
    #[case(SubmissionPolicy::Permissive)]
    #[case(SubmissionPolicy::RequireValid)]
    fn test_valid_draft_is_accepted(#[case] policy: SubmissionPolicy) {
        let s = submit(&Catalog::builtin(), draft("transaction.amount", "≥", "25"), policy).unwrap();
        assert!(s.is_valid());
    }

    #[test]
    fn test_strict_policy_blocks_invalid() {
        let err = submit(&Catalog::builtin(), draft("25", "≥", "transaction.amount"), SubmissionPolicy::RequireValid)
            .unwrap_err();
        match err {
            SubmissionError::Invalid(e) => assert_eq!(e.error_type, ValidationErrorType::LeftNotVariable),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_permissive_policy_records_verdict() {
        let s = submit(&Catalog::builtin(), FormulaDraft::default(), SubmissionPolicy::Permissive).unwrap();
        assert_eq!(s.verdict.map(|v| v.error_type), Some(ValidationErrorType::MissingField));
    }

    #[test]
    fn test_unknown_operator_is_not_a_verdict() {
        let err = submit(&Catalog::builtin(), draft("transaction.amount", ">>", "1"), SubmissionPolicy::Permissive)
            .unwrap_err();
        assert!(matches!(err, SubmissionError::Catalog(CatalogError::UnknownOperator(_))));
    }

    #[rstest]
    #[case("permissive", SubmissionPolicy::Permissive)]
    #[case("PERMISSIVE", SubmissionPolicy::Permissive)]
    #[case("require_valid", SubmissionPolicy::RequireValid)]
    #[case(" strict ", SubmissionPolicy::RequireValid)]
    fn test_policy_from_str(#[case] input: &str, #[case] expected: SubmissionPolicy) {
        assert_eq!(input.parse::<SubmissionPolicy>().unwrap(), expected);
    }

    #[test]
    fn test_policy_from_str_rejects_unknown() {
        let err = " Lenient".parse::<SubmissionPolicy>().unwrap_err();
        assert_eq!(err, UnknownPolicy(" Lenient".to_string()));
        assert_eq!(err.to_string(), "Unknown submission policy ' Lenient'");
    }
}
