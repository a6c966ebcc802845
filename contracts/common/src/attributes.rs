//! Well-known attribute keys.
//!
//! Each key is the Keccak-256 digest of its ASCII name. Registries accept
//! arbitrary 32-byte keys, so this set is a convention rather than a
//! restriction; it exists so policies written against one deployment remain
//! portable to another.

use soroban_sdk::{BytesN, Env};

use crate::hash_name;

/// Subject's role, e.g. `hash_name("employee")`.
pub fn sub_role(env: &Env) -> BytesN<32> {
    hash_name(env, "SUB_ROLE")
}

/// Subject's organisation.
pub fn sub_org(env: &Env) -> BytesN<32> {
    hash_name(env, "SUB_ORG")
}

/// Subject's department.
pub fn sub_dept(env: &Env) -> BytesN<32> {
    hash_name(env, "SUB_DEPT")
}

/// Subject's office.
pub fn sub_office(env: &Env) -> BytesN<32> {
    hash_name(env, "SUB_OFFICE")
}

/// Device type, for device principals.
pub fn sub_dev_type(env: &Env) -> BytesN<32> {
    hash_name(env, "SUB_DEV_TYPE")
}

/// Subject's location.
pub fn sub_location(env: &Env) -> BytesN<32> {
    hash_name(env, "SUB_LOCATION")
}

/// Resource type of the protected object, e.g. `hash_name("doorLock")`.
pub fn obj_resource_type(env: &Env) -> BytesN<32> {
    hash_name(env, "OBJ_RESOURCE_TYPE")
}

/// Department that owns the object.
pub fn obj_owner_dept(env: &Env) -> BytesN<32> {
    hash_name(env, "OBJ_OWNER_DEPT")
}

/// Object's sensitivity classification.
pub fn obj_sensitivity(env: &Env) -> BytesN<32> {
    hash_name(env, "OBJ_SENSITIVITY")
}

/// Object's location.
pub fn obj_location(env: &Env) -> BytesN<32> {
    hash_name(env, "OBJ_LOCATION")
}
