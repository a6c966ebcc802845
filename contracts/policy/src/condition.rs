//! The typed condition AST policy rules are built from.
//!
//! Each operator variant carries exactly the operands it uses, so a
//! malformed condition (say, a numeric bound on a set-membership test) is
//! unrepresentable rather than merely rejected.

use soroban_sdk::{contracttype, BytesN, Vec, U256};

use crate::errors::PolicyError;

/// Upper bound on conditions per rule.
pub const MAX_CONDITIONS: u32 = 16;
/// Upper bound on members of an [`Condition::InSet`] comparison set.
pub const MAX_SET_VALUES: u32 = 8;

/// Where a condition operand is read from at evaluation time.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum OperandSource {
    Subject = 1,
    Object = 2,
    Environment = 3,
}

/// A condition operand: an attribute key resolved against a source.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Operand {
    pub source: OperandSource,
    pub key: BytesN<32>,
}

impl Operand {
    pub fn subject(key: BytesN<32>) -> Self {
        Operand {
            source: OperandSource::Subject,
            key,
        }
    }

    pub fn object(key: BytesN<32>) -> Self {
        Operand {
            source: OperandSource::Object,
            key,
        }
    }

    pub fn environment(key: BytesN<32>) -> Self {
        Operand {
            source: OperandSource::Environment,
            key,
        }
    }
}

/// A single policy condition. A rule holds 1 to 16 of these, combined with
/// AND: the rule matches only when every condition holds.
///
/// `Eq`, `Neq`, `InSet`, and `EqField` compare opaque 32-byte values;
/// `Le`/`Lt`/`Ge`/`Gt` compare the unsigned 256-bit numeric view. Opaque
/// comparisons never coerce to numeric.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Condition {
    /// Operand bytes equal the literal value.
    Eq(Operand, BytesN<32>),
    /// Operand bytes differ from the literal value.
    Neq(Operand, BytesN<32>),
    /// Operand number is at most the literal number.
    Le(Operand, U256),
    /// Operand number is below the literal number.
    Lt(Operand, U256),
    /// Operand number is at least the literal number.
    Ge(Operand, U256),
    /// Operand number is above the literal number.
    Gt(Operand, U256),
    /// Operand bytes equal some member of the set. An empty set never
    /// matches.
    InSet(Operand, Vec<BytesN<32>>),
    /// Bytes of two resolved operands are equal.
    EqField(Operand, Operand),
}

/// Validates a rule's condition list: 1 to 16 conditions, and at most 8
/// members in any comparison set.
pub fn validate_shape(conditions: &Vec<Condition>) -> Result<(), PolicyError> {
    if conditions.is_empty() || conditions.len() > MAX_CONDITIONS {
        return Err(PolicyError::BadPolicyShape);
    }
    for condition in conditions.iter() {
        if let Condition::InSet(_, values) = condition {
            if values.len() > MAX_SET_VALUES {
                return Err(PolicyError::BadPolicyShape);
            }
        }
    }
    Ok(())
}
