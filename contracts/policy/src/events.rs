//! Audit events published by the policy catalog.

use abac_common::Action;
use soroban_sdk::{symbol_short, Address, Env};

/// Event published when the catalog is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub registry: Address,
    pub timestamp: u64,
}

/// Event published when a rule is created.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyCreatedEvent {
    pub id: u64,
    pub resource: Address,
    pub action: Action,
    pub condition_count: u32,
    pub timestamp: u64,
}

/// Event published when a rule is enabled or disabled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyToggledEvent {
    pub id: u64,
    pub enabled: bool,
    pub timestamp: u64,
}

/// Event published when a rule is deleted from the index.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyDeletedEvent {
    pub id: u64,
    pub resource: Address,
    pub action: Action,
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

pub fn publish_initialized(env: &Env, admin: Address, registry: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        registry,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_policy_created(
    env: &Env,
    id: u64,
    resource: Address,
    action: Action,
    condition_count: u32,
) {
    let topics = (symbol_short!("POL_NEW"), resource.clone());
    let data = PolicyCreatedEvent {
        id,
        resource,
        action,
        condition_count,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_policy_toggled(env: &Env, id: u64, enabled: bool) {
    let topics = (symbol_short!("POL_TGL"),);
    let data = PolicyToggledEvent {
        id,
        enabled,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_policy_deleted(env: &Env, id: u64, resource: Address, action: Action) {
    let topics = (symbol_short!("POL_DEL"), resource.clone());
    let data = PolicyDeletedEvent {
        id,
        resource,
        action,
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
