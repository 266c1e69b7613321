//! Defines the semantic types of operands and the compiled-in vocabulary
//! of variables and operators.
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// The inferred semantic type of an operand.
///
/// `Invalid` is not a real type. It is the classifier's "could not determine"
/// outcome and never appears in an operator's admissible pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperandType {
    Int,
    String,
    Invalid,
}

impl OperandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperandType::Int => "Int",
            OperandType::String => "String",
            OperandType::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for OperandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One admissible `(left, right)` combination for an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypePair(pub OperandType, pub OperandType);

impl TypePair {
    #[inline]
    pub fn left(&self) -> OperandType { self.0 }
    #[inline]
    pub fn right(&self) -> OperandType { self.1 }
}

/// Most operators admit one or two pairs, so they are stored inline.
pub type TypePairs = SmallVec<[TypePair; 2]>;

/// A named, typed reference into the business-data schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub operand_type: OperandType,
}

/// A comparison operator. Two operators are the same operator when their
/// admissible pair lists are equal; the symbol is only for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    pub symbol: String,
    pub pairs: TypePairs,
}

impl Operator {
    pub fn new(symbol: impl Into<String>, pairs: impl IntoIterator<Item = TypePair>) -> Self {
        Self { symbol: symbol.into(), pairs: pairs.into_iter().collect() }
    }

    pub fn accepts_left(&self, t: OperandType) -> bool {
        self.pairs.iter().any(|p| p.left() == t)
    }

    pub fn accepts_right(&self, t: OperandType) -> bool {
        self.pairs.iter().any(|p| p.right() == t)
    }

    pub fn accepts(&self, left: OperandType, right: OperandType) -> bool {
        self.pairs.contains(&TypePair(left, right))
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl Eq for Operator {}

/// The variables every build knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinVariable {
    TransactionAmount,
    AccountBalance,
    AccountTransactionCount,
    TransactionCurrency,
    SenderFirstName,
    SenderLastName,
    ReceiverFirstName,
    ReceiverLastName,
}

impl BuiltinVariable {
    pub const ALL: [BuiltinVariable; 8] = [
        BuiltinVariable::TransactionAmount,
        BuiltinVariable::AccountBalance,
        BuiltinVariable::AccountTransactionCount,
        BuiltinVariable::TransactionCurrency,
        BuiltinVariable::SenderFirstName,
        BuiltinVariable::SenderLastName,
        BuiltinVariable::ReceiverFirstName,
        BuiltinVariable::ReceiverLastName,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinVariable::TransactionAmount => "transaction.amount",
            BuiltinVariable::AccountBalance => "account.balance",
            BuiltinVariable::AccountTransactionCount => "account.transaction_count",
            BuiltinVariable::TransactionCurrency => "transaction.currency",
            BuiltinVariable::SenderFirstName => "transaction.sender.first_name",
            BuiltinVariable::SenderLastName => "transaction.sender.last_name",
            BuiltinVariable::ReceiverFirstName => "transaction.receiver.first_name",
            BuiltinVariable::ReceiverLastName => "transaction.receiver.last_name",
        }
    }

    pub fn operand_type(&self) -> OperandType {
        match self {
            BuiltinVariable::TransactionAmount
            | BuiltinVariable::AccountBalance
            | BuiltinVariable::AccountTransactionCount => OperandType::Int,
            BuiltinVariable::TransactionCurrency
            | BuiltinVariable::SenderFirstName
            | BuiltinVariable::SenderLastName
            | BuiltinVariable::ReceiverFirstName
            | BuiltinVariable::ReceiverLastName => OperandType::String,
        }
    }

    pub fn to_variable(self) -> Variable {
        Variable { name: self.name().to_string(), operand_type: self.operand_type() }
    }
}

/// The operators every build knows about, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinOperator {
    GreaterOrEqual,
    Equal,
    NotEqual,
    IsCloseMatch,
}

impl BuiltinOperator {
    pub const ALL: [BuiltinOperator; 4] = [
        BuiltinOperator::GreaterOrEqual,
        BuiltinOperator::Equal,
        BuiltinOperator::NotEqual,
        BuiltinOperator::IsCloseMatch,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            BuiltinOperator::GreaterOrEqual => "≥",
            BuiltinOperator::Equal => "=",
            BuiltinOperator::NotEqual => "≠",
            BuiltinOperator::IsCloseMatch => "is_close_match",
        }
    }

    pub fn pairs(&self) -> TypePairs {
        use OperandType::{Int, String};
        match self {
            BuiltinOperator::GreaterOrEqual => smallvec![TypePair(Int, Int)],
            BuiltinOperator::Equal | BuiltinOperator::NotEqual => {
                smallvec![TypePair(Int, Int), TypePair(String, String)]
            }
            BuiltinOperator::IsCloseMatch => smallvec![TypePair(String, String)],
        }
    }

    pub fn to_operator(self) -> Operator {
        Operator { symbol: self.symbol().to_string(), pairs: self.pairs() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_identity_is_pair_list() {
        let eq = BuiltinOperator::Equal.to_operator();
        let ne = BuiltinOperator::NotEqual.to_operator();
        assert_eq!(eq, ne);
        assert_ne!(eq, BuiltinOperator::GreaterOrEqual.to_operator());
    }

    #[test]
    fn test_invalid_never_admitted() {
        for op in BuiltinOperator::ALL {
            let op = op.to_operator();
            assert!(!op.accepts_left(OperandType::Invalid));
            assert!(!op.accepts_right(OperandType::Invalid));
        }
    }

    #[test]
    fn test_builtin_variables_are_typed() {
        for v in BuiltinVariable::ALL {
            assert_ne!(v.operand_type(), OperandType::Invalid, "{}", v.name());
        }
    }
}
