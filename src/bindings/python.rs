//! The `FormulaChecker` class exposed to Python hosts.
use crate::catalog::Catalog;
use crate::config::Config;
use crate::display::catalog::format_catalog;
use crate::formula::FormulaDraft;
use crate::submission::{self, SubmissionError, SubmissionPolicy};
use crate::type_system::{classify, FormulaChecker};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pyclass(name = "FormulaChecker")]
#[derive(Debug, Clone)]
pub struct PyFormulaChecker {
    catalog: Catalog,
    policy: SubmissionPolicy,
}

#[pymethods]
impl PyFormulaChecker {
    /// Uses the environment configuration unless a catalog path is given.
    #[new]
    #[pyo3(signature = (catalog_path=None))]
    pub fn new(catalog_path: Option<String>) -> PyResult<Self> {
        let mut config = Config::from_env().map_err(|e| PyValueError::new_err(e.to_string()))?;
        if let Some(path) = catalog_path {
            config.catalog_path = Some(path.into());
        }
        let catalog = config.catalog().map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { catalog, policy: config.submission_policy })
    }

    /// Returns `None` for a valid formula, else `(kind, message)`.
    #[pyo3(signature = (left=None, operator=None, right=None))]
    pub fn validate(
        &self,
        left: Option<String>,
        operator: Option<String>,
        right: Option<String>,
    ) -> PyResult<Option<(String, String)>> {
        let draft = FormulaDraft { left, operator, right };
        let formula = draft.resolve(&self.catalog).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(FormulaChecker::new(&self.catalog)
            .check(&formula)
            .err()
            .map(|e| (e.error_type.as_str().to_string(), e.message)))
    }

    pub fn classify(&self, operand: &str) -> &'static str {
        classify(&self.catalog, operand).as_str()
    }

    pub fn variables(&self) -> Vec<(String, &'static str)> {
        self.catalog.variables().iter().map(|v| (v.name.clone(), v.operand_type.as_str())).collect()
    }

    pub fn operators(&self) -> Vec<String> {
        self.catalog.operators().iter().map(|op| op.symbol.clone()).collect()
    }

    pub fn describe(&self) -> String {
        format_catalog(&self.catalog)
    }

    /// Applies the configured submission policy. Returns the draft as JSON.
    #[pyo3(signature = (left=None, operator=None, right=None))]
    pub fn submit(
        &self,
        left: Option<String>,
        operator: Option<String>,
        right: Option<String>,
    ) -> PyResult<String> {
        let draft = FormulaDraft { left, operator, right };
        let accepted = submission::submit(&self.catalog, draft, self.policy).map_err(|e| match e {
            SubmissionError::Invalid(v) => PyValueError::new_err(v.message),
            other => PyValueError::new_err(other.to_string()),
        })?;
        serde_json::to_string(&accepted).map_err(|e| PyValueError::new_err(e.to_string()))
    }
}
