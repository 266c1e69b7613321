//! Type checking for single comparison formulas of the form `left operator right`.
//!
//! The `catalog` fixes which variables and operators exist, the
//! `type_system` decides whether a formula is well-typed, and the Python
//! facade below exposes both to a host UI.

pub mod catalog;
pub mod config;
pub mod display;
pub mod formula;
pub mod logging;
pub mod submission;
pub mod type_system;

#[cfg(feature = "python")]
pub mod bindings {
    pub mod python;
}

pub use catalog::{Catalog, CatalogError, OperandType, Operator};
pub use formula::{Formula, FormulaDraft};
pub use type_system::{validate, FormulaChecker, ValidationError, ValidationErrorType, ValidationResult};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Installs the stderr `tracing` subscriber from Python.
#[cfg(feature = "python")]
#[pyfunction]
fn init_logging() -> bool {
    logging::init()
}

// --- Module Definition ---
/// This function defines the `_core` Python module.
#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<bindings::python::PyFormulaChecker>()?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}
