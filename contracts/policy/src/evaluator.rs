//! Pure decision logic: does a rule match a request?
//!
//! Evaluation is side-effect free and bounded. A rule holds at most 16
//! conditions, each condition resolves at most two operands, and a set
//! comparison scans at most 8 members, so one rule costs at most 160
//! attribute reads plus 16 operator dispatches.

use abac_common::{environment, value_to_number, EnvironmentData};
use soroban_sdk::{Address, BytesN, Env, U256};

use crate::condition::{Condition, Operand, OperandSource};
use crate::{AttributeRegistryClient, PolicyRule};

/// A resolved operand, carried as the two views operators pick from.
///
/// Producing both views together keeps numeric and identifier semantics
/// from drifting between operator sites.
struct OperandValue {
    bytes: BytesN<32>,
    number: U256,
}

fn resolve(
    env: &Env,
    registry: &AttributeRegistryClient,
    operand: &Operand,
    subject: &Address,
    object: &Address,
    data: &EnvironmentData,
) -> OperandValue {
    let bytes = match operand.source {
        OperandSource::Subject => registry.subject_attr(subject, &operand.key),
        OperandSource::Object => registry.object_attr(object, &operand.key),
        OperandSource::Environment => environment::resolve(env, data, &operand.key),
    };
    let number = value_to_number(env, &bytes);
    OperandValue { bytes, number }
}

/// Evaluates a single condition. Never fails: missing attributes and
/// unknown environment keys resolve to the all-zero value.
pub fn evaluate_condition(
    env: &Env,
    registry: &AttributeRegistryClient,
    condition: &Condition,
    subject: &Address,
    object: &Address,
    data: &EnvironmentData,
) -> bool {
    match condition {
        Condition::Eq(left, value) => {
            resolve(env, registry, left, subject, object, data).bytes == *value
        }
        Condition::Neq(left, value) => {
            resolve(env, registry, left, subject, object, data).bytes != *value
        }
        Condition::Le(left, bound) => {
            resolve(env, registry, left, subject, object, data).number <= *bound
        }
        Condition::Lt(left, bound) => {
            resolve(env, registry, left, subject, object, data).number < *bound
        }
        Condition::Ge(left, bound) => {
            resolve(env, registry, left, subject, object, data).number >= *bound
        }
        Condition::Gt(left, bound) => {
            resolve(env, registry, left, subject, object, data).number > *bound
        }
        Condition::InSet(left, values) => {
            let left = resolve(env, registry, left, subject, object, data);
            values.iter().any(|value| value == left.bytes)
        }
        Condition::EqField(left, right) => {
            let left = resolve(env, registry, left, subject, object, data);
            let right = resolve(env, registry, right, subject, object, data);
            left.bytes == right.bytes
        }
    }
}

/// Evaluates a full rule: `enabled` AND the conjunction of its conditions,
/// short-circuiting on the first condition that fails. Condition order is
/// not observable beyond which reads are skipped.
pub fn evaluate_rule(
    env: &Env,
    registry: &AttributeRegistryClient,
    rule: &PolicyRule,
    subject: &Address,
    object: &Address,
    data: &EnvironmentData,
) -> bool {
    if !rule.enabled {
        return false;
    }
    for condition in rule.conditions.iter() {
        if !evaluate_condition(env, registry, &condition, subject, object, data) {
            return false;
        }
    }
    true
}
