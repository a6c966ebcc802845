//! Audit events published by the access manager.
//!
//! The decision event is the engine's immutable audit record: one per
//! authoritative access request, never one for a rejected environment.

use abac_common::Action;
use soroban_sdk::{symbol_short, Address, Env};

use crate::AccessDecision;

/// Event published when the manager is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub catalog: Address,
    pub timestamp: u64,
}

/// The audit record for one authoritative access request.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessDecisionEvent {
    pub subject: Address,
    pub resource: Address,
    pub action: Action,
    pub permit: bool,
    /// First matching rule id in catalog order; 0 when no rule matched.
    pub matched_policy: u64,
    pub timestamp: u64,
}

/// Event published when the environment oracle is installed or cleared.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleConfiguredEvent {
    pub oracle: Option<Address>,
    pub timestamp: u64,
}

/// Event published when an admin transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub timestamp: u64,
}

/// Event published when an admin transfer completes.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChangedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address, catalog: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        catalog,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_access_decision(
    env: &Env,
    subject: Address,
    resource: Address,
    action: Action,
    decision: AccessDecision,
) {
    let topics = (symbol_short!("DECISION"), subject.clone(), resource.clone());
    let data = AccessDecisionEvent {
        subject,
        resource,
        action,
        permit: decision.permit,
        matched_policy: decision.matched_policy,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_oracle_configured(env: &Env, oracle: Option<Address>) {
    let topics = (symbol_short!("ORACLE"),);
    let data = OracleConfiguredEvent {
        oracle,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_admin_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    let topics = (symbol_short!("ADM_PROP"), current_admin.clone());
    let data = AdminProposedEvent {
        current_admin,
        proposed_admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_admin_changed(env: &Env, old_admin: Address, new_admin: Address) {
    let topics = (symbol_short!("ADM_CHG"), old_admin.clone());
    let data = AdminChangedEvent {
        old_admin,
        new_admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_paused(env: &Env, caller: Address, paused: bool) {
    env.events()
        .publish((symbol_short!("PAUSED"), caller), paused);
}
