//! Audit events published by the attribute registry.

use soroban_sdk::{symbol_short, Address, BytesN, Env};

/// Event published when the registry is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published for every subject attribute write.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubjectAttributeSetEvent {
    pub subject: Address,
    pub key: BytesN<32>,
    pub value: BytesN<32>,
    pub timestamp: u64,
}

/// Event published for every object attribute write.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ObjectAttributeSetEvent {
    pub object: Address,
    pub key: BytesN<32>,
    pub value: BytesN<32>,
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

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_subject_attribute_set(
    env: &Env,
    subject: Address,
    key: BytesN<32>,
    value: BytesN<32>,
) {
    let topics = (symbol_short!("SUB_ATTR"), subject.clone());
    let data = SubjectAttributeSetEvent {
        subject,
        key,
        value,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_object_attribute_set(
    env: &Env,
    object: Address,
    key: BytesN<32>,
    value: BytesN<32>,
) {
    let topics = (symbol_short!("OBJ_ATTR"), object.clone());
    let data = ObjectAttributeSetEvent {
        object,
        key,
        value,
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
