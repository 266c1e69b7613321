//! The catalog table: verification on build and the variable name index.
use super::types::*;
use crate::type_system::classifier::{is_int_literal, is_string_literal};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed catalog table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Variable names must not be empty")]
    EmptyVariableName,
    #[error("Variable name '{0}' reads as a literal")]
    LiteralVariableName(String),
    #[error("Variable '{0}' is declared more than once")]
    DuplicateVariable(String),
    #[error("Variable '{name}' cannot be declared with type {declared}")]
    InvalidDeclaredType { name: String, declared: OperandType },
    #[error("Operator '{0}' is declared more than once")]
    DuplicateOperator(String),
    #[error("Operator '{0}' has no admissible type pairs")]
    EmptyOperator(String),
    #[error("Operator '{symbol}' pair {index} uses type Invalid")]
    InvalidOperatorPair { symbol: String, index: usize },
    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),
}

/// The serialized shape of a catalog: just the two lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogTable {
    pub variables: Vec<Variable>,
    pub operators: Vec<Operator>,
}

/// The closed vocabulary a formula may draw from.
///
/// Read-only once built. Every way in, deserialization included, goes
/// through `Catalog::new`, which verifies the table and builds the name index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "CatalogTable", into = "CatalogTable")]
pub struct Catalog {
    variables: Vec<Variable>,
    operators: Vec<Operator>,
    index: HashMap<String, OperandType>,
}

impl TryFrom<CatalogTable> for Catalog {
    type Error = CatalogError;

    fn try_from(table: CatalogTable) -> Result<Self, Self::Error> {
        Catalog::new(table.variables, table.operators)
    }
}

impl From<Catalog> for CatalogTable {
    fn from(catalog: Catalog) -> Self {
        Self { variables: catalog.variables, operators: catalog.operators }
    }
}

impl Catalog {
    /// The compiled-in vocabulary.
    pub fn builtin() -> Self {
        let mut catalog = Self {
            variables: BuiltinVariable::ALL.iter().map(|v| v.to_variable()).collect(),
            operators: BuiltinOperator::ALL.iter().map(|o| o.to_operator()).collect(),
            index: HashMap::new(),
        };
        catalog.rebuild_index();
        catalog
    }

    /// Builds a catalog from explicit lists, enforcing the same rules as a loaded table.
    pub fn new(variables: Vec<Variable>, operators: Vec<Operator>) -> Result<Self, CatalogError> {
        let mut catalog = Self { variables, operators, index: HashMap::new() };
        catalog.verify()?;
        catalog.rebuild_index();
        Ok(catalog)
    }

    /// Parses an external JSON table.
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let table: CatalogTable = serde_json::from_str(source)?;
        let catalog = Self::try_from(table)?;
        tracing::debug!(
            variables = catalog.variables.len(),
            operators = catalog.operators.len(),
            "parsed catalog table"
        );
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&source)?;
        tracing::info!(path = %path.display(), "loaded catalog");
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn verify(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for v in &self.variables {
            if v.name.is_empty() {
                return Err(CatalogError::EmptyVariableName);
            }
            // A name that reads as a literal would classify differently from its declared type.
            if is_int_literal(&v.name) || is_string_literal(&v.name) {
                return Err(CatalogError::LiteralVariableName(v.name.clone()));
            }
            if v.operand_type == OperandType::Invalid {
                return Err(CatalogError::InvalidDeclaredType {
                    name: v.name.clone(),
                    declared: v.operand_type,
                });
            }
            if !seen.insert(v.name.as_str()) {
                return Err(CatalogError::DuplicateVariable(v.name.clone()));
            }
        }

        let mut symbols = HashSet::new();
        for op in &self.operators {
            if !symbols.insert(op.symbol.as_str()) {
                return Err(CatalogError::DuplicateOperator(op.symbol.clone()));
            }
            if op.pairs.is_empty() {
                return Err(CatalogError::EmptyOperator(op.symbol.clone()));
            }
            if let Some(index) = op.pairs.iter().position(|p| {
                p.left() == OperandType::Invalid || p.right() == OperandType::Invalid
            }) {
                return Err(CatalogError::InvalidOperatorPair { symbol: op.symbol.clone(), index });
            }
        }
        Ok(())
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .variables
            .iter()
            .map(|v| (v.name.clone(), v.operand_type))
            .collect();
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Operators in display order.
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Returns the declared type if `name` is exactly a known variable.
    #[inline]
    pub fn variable_type(&self, name: &str) -> Option<OperandType> {
        self.index.get(name).copied()
    }

    pub fn is_variable(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Variables declared with type `t`, in declaration order.
    pub fn variables_of(&self, t: OperandType) -> impl Iterator<Item = &Variable> + '_ {
        self.variables.iter().filter(move |v| v.operand_type == t)
    }

    pub fn operator(&self, symbol: &str) -> Option<&Operator> {
        self.operators.iter().find(|op| op.symbol == symbol)
    }

    pub fn require_operator(&self, symbol: &str) -> Result<&Operator, CatalogError> {
        self.operator(symbol)
            .ok_or_else(|| CatalogError::UnknownOperator(symbol.to_string()))
    }
}
