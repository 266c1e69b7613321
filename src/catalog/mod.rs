//! The closed vocabulary of typed variables and operators a formula may use.
pub mod registry;
pub mod types;

pub use registry::{Catalog, CatalogError, CatalogTable};
pub use types::{BuiltinOperator, BuiltinVariable, OperandType, Operator, TypePair, TypePairs, Variable};
