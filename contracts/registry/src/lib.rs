//! Attribute registry: the ABAC engine's store of subject and object
//! attributes.
//!
//! Attributes are opaque `(key, value)` pairs of 32-byte tokens attached to
//! an identifier. Subjects may declare their own attributes; object
//! attributes are admin-only. Policies should therefore treat subject
//! attributes as advisory unless the admin wrote them. Missing attributes
//! read as the all-zero value, never an error. Attributes are never
//! deleted; the last writer wins.

#![no_std]

pub mod errors;
pub mod events;

#[cfg(test)]
mod test;

use abac_common::pausable;
use soroban_sdk::{contract, contractimpl, symbol_short, Address, BytesN, Env, Symbol, Vec};

pub use errors::RegistryError;

const ADMIN: Symbol = symbol_short!("ADMIN");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");
const INITIALIZED: Symbol = symbol_short!("INIT");

const SUB_ATTR: Symbol = symbol_short!("SUB_ATTR");
const OBJ_ATTR: Symbol = symbol_short!("OBJ_ATTR");
const SUB_REG: Symbol = symbol_short!("SUB_REG");
const OBJ_REG: Symbol = symbol_short!("OBJ_REG");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_ttl_attr_key(env: &Env, key: &(Symbol, Address, BytesN<32>)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_ttl_registered_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

#[contract]
pub struct AttributeRegistryContract;

#[contractimpl]
impl AttributeRegistryContract {
    fn admin(env: &Env) -> Result<Address, RegistryError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(RegistryError::NotInitialized)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
        if *caller != Self::admin(env)? {
            return Err(RegistryError::NotAuthorized);
        }
        Ok(())
    }

    /// Subject attributes may be written by the subject itself or the admin.
    fn require_subject_writer(
        env: &Env,
        caller: &Address,
        subject: &Address,
    ) -> Result<(), RegistryError> {
        if caller != subject && *caller != Self::admin(env)? {
            return Err(RegistryError::NotAuthorized);
        }
        Ok(())
    }

    fn mark_subject_registered(env: &Env, subject: &Address) {
        let key = (SUB_REG, subject.clone());
        env.storage().persistent().set(&key, &true);
        extend_ttl_registered_key(env, &key);
    }

    fn mark_object_registered(env: &Env, object: &Address) {
        let key = (OBJ_REG, object.clone());
        env.storage().persistent().set(&key, &true);
        extend_ttl_registered_key(env, &key);
    }

    fn write_subject_attribute(env: &Env, subject: &Address, key: &BytesN<32>, value: &BytesN<32>) {
        let storage_key = (SUB_ATTR, subject.clone(), key.clone());
        env.storage().persistent().set(&storage_key, value);
        extend_ttl_attr_key(env, &storage_key);
        events::publish_subject_attribute_set(env, subject.clone(), key.clone(), value.clone());
    }

    fn write_object_attribute(env: &Env, object: &Address, key: &BytesN<32>, value: &BytesN<32>) {
        let storage_key = (OBJ_ATTR, object.clone(), key.clone());
        env.storage().persistent().set(&storage_key, value);
        extend_ttl_attr_key(env, &storage_key);
        events::publish_object_attribute_set(env, object.clone(), key.clone(), value.clone());
    }

    /// Initialize the registry with an admin address.
    pub fn initialize(env: Env, admin: Address) -> Result<(), RegistryError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(RegistryError::AlreadyInitialized);
        }
        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        events::publish_initialized(&env, admin);
        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, RegistryError> {
        Self::admin(&env)
    }

    /// Propose a new admin. The proposed admin completes the transfer by
    /// calling `accept_admin`.
    pub fn propose_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        env.storage().instance().set(&PENDING_ADMIN, &new_admin);
        events::publish_admin_proposed(&env, caller, new_admin);
        Ok(())
    }

    /// Complete a pending admin transfer. Only the proposed admin may call.
    pub fn accept_admin(env: Env, caller: Address) -> Result<(), RegistryError> {
        caller.require_auth();
        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(RegistryError::NotAuthorized)?;
        if caller != pending {
            return Err(RegistryError::NotAuthorized);
        }
        let old_admin = Self::admin(&env)?;
        env.storage().instance().set(&ADMIN, &caller);
        env.storage().instance().remove(&PENDING_ADMIN);
        events::publish_admin_changed(&env, old_admin, caller);
        Ok(())
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&PENDING_ADMIN)
    }

    /// Pauses or resumes attribute writes. Reads are never paused.
    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        pausable::set_paused(&env, paused);
        events::publish_paused(&env, caller, paused);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        pausable::is_paused(&env)
    }

    /// Sets one subject attribute. Last writer wins.
    pub fn set_subject_attribute(
        env: Env,
        caller: Address,
        subject: Address,
        key: BytesN<32>,
        value: BytesN<32>,
    ) -> Result<(), RegistryError> {
        pausable::require_not_paused(&env)?;
        caller.require_auth();
        Self::require_subject_writer(&env, &caller, &subject)?;

        Self::mark_subject_registered(&env, &subject);
        Self::write_subject_attribute(&env, &subject, &key, &value);
        Ok(())
    }

    /// Sets a batch of subject attributes from parallel key/value vectors.
    ///
    /// Fails with `LengthMismatch`, writing nothing, when the vectors differ
    /// in length. An empty batch still marks the subject registered.
    pub fn set_subject_attributes(
        env: Env,
        caller: Address,
        subject: Address,
        keys: Vec<BytesN<32>>,
        values: Vec<BytesN<32>>,
    ) -> Result<(), RegistryError> {
        pausable::require_not_paused(&env)?;
        caller.require_auth();
        Self::require_subject_writer(&env, &caller, &subject)?;
        if keys.len() != values.len() {
            return Err(RegistryError::LengthMismatch);
        }

        Self::mark_subject_registered(&env, &subject);
        for (key, value) in keys.iter().zip(values.iter()) {
            Self::write_subject_attribute(&env, &subject, &key, &value);
        }
        Ok(())
    }

    /// Sets one object attribute. Admin only.
    pub fn set_object_attribute(
        env: Env,
        caller: Address,
        object: Address,
        key: BytesN<32>,
        value: BytesN<32>,
    ) -> Result<(), RegistryError> {
        pausable::require_not_paused(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        Self::mark_object_registered(&env, &object);
        Self::write_object_attribute(&env, &object, &key, &value);
        Ok(())
    }

    /// Sets a batch of object attributes from parallel key/value vectors.
    /// Admin only; same all-or-nothing semantics as the subject batch.
    pub fn set_object_attributes(
        env: Env,
        caller: Address,
        object: Address,
        keys: Vec<BytesN<32>>,
        values: Vec<BytesN<32>>,
    ) -> Result<(), RegistryError> {
        pausable::require_not_paused(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        if keys.len() != values.len() {
            return Err(RegistryError::LengthMismatch);
        }

        Self::mark_object_registered(&env, &object);
        for (key, value) in keys.iter().zip(values.iter()) {
            Self::write_object_attribute(&env, &object, &key, &value);
        }
        Ok(())
    }

    /// Reads a subject attribute. Missing attributes read as the all-zero
    /// value.
    pub fn subject_attr(env: Env, subject: Address, key: BytesN<32>) -> BytesN<32> {
        let storage_key = (SUB_ATTR, subject, key);
        env.storage()
            .persistent()
            .get(&storage_key)
            .unwrap_or_else(|| abac_common::zero_value(&env))
    }

    /// Reads an object attribute. Missing attributes read as the all-zero
    /// value.
    pub fn object_attr(env: Env, object: Address, key: BytesN<32>) -> BytesN<32> {
        let storage_key = (OBJ_ATTR, object, key);
        env.storage()
            .persistent()
            .get(&storage_key)
            .unwrap_or_else(|| abac_common::zero_value(&env))
    }

    /// True once at least one subject attribute write (or batch) targeted
    /// the identifier.
    pub fn is_subject_registered(env: Env, id: Address) -> bool {
        env.storage()
            .persistent()
            .get(&(SUB_REG, id))
            .unwrap_or(false)
    }

    /// True once at least one object attribute write (or batch) targeted
    /// the identifier.
    pub fn is_object_registered(env: Env, id: Address) -> bool {
        env.storage()
            .persistent()
            .get(&(OBJ_REG, id))
            .unwrap_or(false)
    }
}
