//! Decision orchestrator for the ABAC engine.
//!
//! Coordinates environment verification, catalog lookup, rule iteration,
//! and audit emission. Decisions are deny-by-default: with no matching
//! enabled rule the answer is deny and `matched_policy` is 0. When several
//! rules match, the first one in catalog iteration order wins, and that id
//! is what the audit record reports.

#![no_std]

pub mod audit;
pub mod errors;
pub mod events;

use abac_common::{pausable, Action, EnvironmentData};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, BytesN, Env, Symbol, Vec,
};

pub use errors::AccessError;

/// Client for the policy catalog the orchestrator consults.
#[soroban_sdk::contractclient(name = "PolicyCatalogClient")]
pub trait PolicyCatalogInterface {
    fn get_policy_ids(env: Env, resource: Address, action: Action) -> Vec<u64>;
    fn evaluate_policy(
        env: Env,
        id: u64,
        subject: Address,
        object: Address,
        env_data: EnvironmentData,
    ) -> bool;
}

/// Client for the environment oracle.
///
/// The oracle attests that a supplied environment record is authentic for
/// the given proof digest. It is called exactly once per authoritative
/// request while installed, and is part of the trust boundary.
#[soroban_sdk::contractclient(name = "EnvOracleClient")]
pub trait EnvOracleInterface {
    fn verify(env: Env, data: EnvironmentData, proof: BytesN<32>) -> bool;
}

/// The outcome of an access check.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessDecision {
    pub permit: bool,
    /// First matching rule id in catalog iteration order; 0 when no rule
    /// matched.
    pub matched_policy: u64,
}

const ADMIN: Symbol = symbol_short!("ADMIN");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");
const INITIALIZED: Symbol = symbol_short!("INIT");
const CATALOG: Symbol = symbol_short!("CATALOG");
const ORACLE: Symbol = symbol_short!("ORACLE");

#[contract]
pub struct AccessManagerContract;

#[contractimpl]
impl AccessManagerContract {
    fn admin(env: &Env) -> Result<Address, AccessError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(AccessError::NotInitialized)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), AccessError> {
        if *caller != Self::admin(env)? {
            return Err(AccessError::NotAuthorized);
        }
        Ok(())
    }

    fn catalog(env: &Env) -> Result<Address, AccessError> {
        env.storage()
            .instance()
            .get(&CATALOG)
            .ok_or(AccessError::NotInitialized)
    }

    /// Walks the candidate rules in catalog order; the first match wins.
    fn decide(
        env: &Env,
        catalog: &Address,
        subject: &Address,
        resource: &Address,
        action: Action,
        data: &EnvironmentData,
    ) -> AccessDecision {
        let catalog = PolicyCatalogClient::new(env, catalog);
        let ids = catalog.get_policy_ids(resource, &action);
        for id in ids.iter() {
            if catalog.evaluate_policy(&id, subject, resource, data) {
                return AccessDecision {
                    permit: true,
                    matched_policy: id,
                };
            }
        }
        AccessDecision {
            permit: false,
            matched_policy: 0,
        }
    }

    /// Initialize the manager with an admin and the policy catalog it
    /// consults.
    pub fn initialize(env: Env, admin: Address, catalog: Address) -> Result<(), AccessError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(AccessError::AlreadyInitialized);
        }
        if catalog == env.current_contract_address() {
            return Err(AccessError::InvalidDependency);
        }
        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&CATALOG, &catalog);
        env.storage().instance().set(&INITIALIZED, &true);
        events::publish_initialized(&env, admin, catalog);
        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, AccessError> {
        Self::admin(&env)
    }

    pub fn get_catalog(env: Env) -> Result<Address, AccessError> {
        Self::catalog(&env)
    }

    /// Propose a new admin. The proposed admin completes the transfer by
    /// calling `accept_admin`.
    pub fn propose_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), AccessError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        env.storage().instance().set(&PENDING_ADMIN, &new_admin);
        events::publish_admin_proposed(&env, caller, new_admin);
        Ok(())
    }

    /// Complete a pending admin transfer. Only the proposed admin may call.
    pub fn accept_admin(env: Env, caller: Address) -> Result<(), AccessError> {
        caller.require_auth();
        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(AccessError::NotAuthorized)?;
        if caller != pending {
            return Err(AccessError::NotAuthorized);
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

    /// Pauses or resumes authoritative requests. `check_access` stays
    /// available while paused.
    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), AccessError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        pausable::set_paused(&env, paused);
        events::publish_paused(&env, caller, paused);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        pausable::is_paused(&env)
    }

    /// Installs or clears the environment oracle. `None` disables
    /// verification entirely.
    pub fn set_env_oracle(
        env: Env,
        caller: Address,
        oracle: Option<Address>,
    ) -> Result<(), AccessError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        match &oracle {
            Some(address) => {
                if *address == env.current_contract_address() {
                    return Err(AccessError::InvalidDependency);
                }
                env.storage().instance().set(&ORACLE, address);
            }
            None => env.storage().instance().remove(&ORACLE),
        }
        events::publish_oracle_configured(&env, oracle);
        Ok(())
    }

    pub fn get_env_oracle(env: Env) -> Option<Address> {
        env.storage().instance().get(&ORACLE)
    }

    /// True iff an environment oracle is installed.
    pub fn is_oracle_enabled(env: Env) -> bool {
        env.storage().instance().has(&ORACLE)
    }

    /// Read-only decision: no environment verification, no audit event.
    pub fn check_access(
        env: Env,
        subject: Address,
        resource: Address,
        action: Action,
        env_data: EnvironmentData,
    ) -> Result<AccessDecision, AccessError> {
        let catalog = Self::catalog(&env)?;
        Ok(Self::decide(
            &env, &catalog, &subject, &resource, action, &env_data,
        ))
    }

    /// Authoritative decision.
    ///
    /// Verifies the environment when an oracle is installed; if the oracle
    /// rejects it the call fails with `EnvVerificationFailed` and publishes
    /// nothing. Otherwise walks the candidate rules in catalog order,
    /// permits on the first match, denies with `matched_policy = 0` when no
    /// rule matches, and publishes exactly one decision event either way.
    pub fn request_access(
        env: Env,
        subject: Address,
        resource: Address,
        action: Action,
        env_data: EnvironmentData,
        proof: BytesN<32>,
    ) -> Result<bool, AccessError> {
        pausable::require_not_paused(&env)?;
        subject.require_auth();
        let catalog = Self::catalog(&env)?;

        if let Some(oracle) = env.storage().instance().get::<_, Address>(&ORACLE) {
            let accepted = EnvOracleClient::new(&env, &oracle).verify(&env_data, &proof);
            if !accepted {
                return Err(AccessError::EnvVerificationFailed);
            }
        }

        let decision = Self::decide(&env, &catalog, &subject, &resource, action, &env_data);
        audit::record_decision(
            &env,
            &audit::DecisionRecord {
                subject: subject.clone(),
                resource: resource.clone(),
                action,
                permit: decision.permit,
                matched_policy: decision.matched_policy,
                timestamp: env.ledger().timestamp(),
            },
        );
        events::publish_access_decision(&env, subject, resource, action, decision.clone());
        Ok(decision.permit)
    }

    /// Total number of authoritative decisions ever recorded.
    pub fn get_decision_count(env: Env) -> u64 {
        audit::decision_count(&env)
    }

    /// Up to `count` of the most recent decision records, oldest first.
    pub fn get_recent_decisions(env: Env, count: u64) -> Vec<audit::DecisionRecord> {
        audit::recent_decisions(&env, count)
    }
}
