//! Shared vocabulary for the ABAC contract suite.
//!
//! This crate provides:
//! - [`CommonError`] — standardised error codes shared by every contract.
//! - [`Action`] — the action enumeration policies are keyed on.
//! - [`attributes`] — well-known attribute key derivation.
//! - [`environment`] — the decision-time environment record and its resolver.
//! - [`pausable`] — the circuit-breaker guard used by mutating entry points.
//!
//! Contract-specific errors extend the shared code ranges, ensuring no
//! collisions across the suite: 1-9 lifecycle, 10-19 authorization, 20-29
//! lookup, 30-39 validation, 40-49 contract state.

#![no_std]

pub mod attributes;
pub mod environment;
pub mod pausable;

use soroban_sdk::{contracterror, contracttype, Bytes, BytesN, Env, U256};

pub use environment::EnvironmentData;

// ── Shared error enum ───────────────────────────────────────────────────────

/// Error codes shared by every contract in the suite.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum CommonError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Paused = 40,
}

// ── Actions ─────────────────────────────────────────────────────────────────

/// The operations a subject can request on a resource.
///
/// Policy rules are indexed by `(resource, action)`, so a rule only ever
/// applies to a single action.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Action {
    Read = 1,
    Write = 2,
    Execute = 3,
}

// ── Opaque 32-byte tokens ───────────────────────────────────────────────────

/// Derives a 32-byte key or value token from an ASCII name.
///
/// Tokens are Keccak-256 digests, so independently deployed registries and
/// catalogs agree on the well-known key set without coordination. Only the
/// digests are ever compared; the names never appear on-chain.
pub fn hash_name(env: &Env, name: &str) -> BytesN<32> {
    env.crypto()
        .keccak256(&Bytes::from_slice(env, name.as_bytes()))
        .into()
}

/// The all-zero value. Missing attributes read as this value.
pub fn zero_value(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

/// Numeric view of an opaque value: the bytes reinterpreted as a big-endian
/// unsigned 256-bit integer.
pub fn value_to_number(env: &Env, value: &BytesN<32>) -> U256 {
    U256::from_be_bytes(env, &value.clone().into())
}

/// Opaque view of a number: 32 big-endian bytes.
pub fn number_to_value(env: &Env, number: &U256) -> BytesN<32> {
    let be = number.to_be_bytes();
    let mut buf = [0u8; 32];
    be.copy_into_slice(&mut buf);
    BytesN::from_array(env, &buf)
}

#[cfg(test)]
mod test {
    use soroban_sdk::{Env, U256};

    use super::*;

    #[test]
    fn hashed_names_are_distinct() {
        let env = Env::default();
        assert_eq!(hash_name(&env, "SUB_ROLE"), attributes::sub_role(&env));
        assert_ne!(attributes::sub_role(&env), attributes::sub_org(&env));
        assert_ne!(
            environment::time_window_key(&env),
            environment::system_load_key(&env)
        );
    }

    #[test]
    fn number_view_is_big_endian() {
        let env = Env::default();
        let value = number_to_value(&env, &U256::from_u32(&env, 80));
        let raw = value.to_array();
        assert_eq!(raw[31], 80);
        assert!(raw[..31].iter().all(|b| *b == 0));
        assert_eq!(value_to_number(&env, &value), U256::from_u32(&env, 80));
    }

    #[test]
    fn zero_value_is_numerically_zero() {
        let env = Env::default();
        assert_eq!(
            value_to_number(&env, &zero_value(&env)),
            U256::from_u32(&env, 0)
        );
    }
}
