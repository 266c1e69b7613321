//! The formula snapshot handed to the checker, and its owned wire form.
use crate::catalog::{Catalog, CatalogError, Operator};
use serde::{Deserialize, Serialize};

/// A read-only snapshot of a `left operator right` draft.
///
/// Any part may be missing while the user is still filling it in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formula<'a> {
    pub left: Option<&'a str>,
    pub operator: Option<&'a Operator>,
    pub right: Option<&'a str>,
}

impl<'a> Formula<'a> {
    pub fn new(left: &'a str, operator: &'a Operator, right: &'a str) -> Self {
        Self { left: Some(left), operator: Some(operator), right: Some(right) }
    }
}

/// An owned draft as a collaborator serializes it. The operator is named by
/// its symbol and must be resolved against a catalog before checking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaDraft {
    #[serde(default)]
    pub left: Option<String>,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub right: Option<String>,
}

impl FormulaDraft {
    pub fn resolve<'a>(&'a self, catalog: &'a Catalog) -> Result<Formula<'a>, CatalogError> {
        let operator = match self.operator.as_deref() {
            Some(symbol) => Some(catalog.require_operator(symbol)?),
            None => None,
        };
        Ok(Formula {
            left: self.left.as_deref(),
            operator,
            right: self.right.as_deref(),
        })
    }
}
