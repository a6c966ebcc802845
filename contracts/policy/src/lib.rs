//! Policy catalog and evaluator for the ABAC engine.
//!
//! The catalog stores administrator-authored rules and maintains an index
//! from `(resource, action)` to the ids of undeleted rules. Rule records are
//! retained forever once written so historical decisions stay auditable;
//! deletion only removes a rule from the index and clears its enabled flag.
//! Ids are assigned from 1 and strictly increase; id 0 is reserved to mean
//! "no rule" in decisions.
//!
//! The evaluator half of this contract is read-only and never fails: it
//! resolves condition operands against the attribute registry and the
//! supplied environment record, and decides whether a single rule matches.

#![no_std]

pub mod condition;
pub mod errors;
pub mod evaluator;
pub mod events;


use abac_common::{pausable, Action, EnvironmentData};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, BytesN, Env, Symbol, Vec,
};

pub use condition::{Condition, Operand, OperandSource, MAX_CONDITIONS, MAX_SET_VALUES};
pub use errors::PolicyError;

/// Client for the attribute registry the evaluator reads from.
#[soroban_sdk::contractclient(name = "AttributeRegistryClient")]
pub trait AttributeRegistryInterface {
    fn subject_attr(env: Env, subject: Address, key: BytesN<32>) -> BytesN<32>;
    fn object_attr(env: Env, object: Address, key: BytesN<32>) -> BytesN<32>;
}

const ADMIN: Symbol = symbol_short!("ADMIN");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");
const INITIALIZED: Symbol = symbol_short!("INIT");
const REGISTRY: Symbol = symbol_short!("REGISTRY");
const NEXT_ID: Symbol = symbol_short!("NEXT_ID");

const RULE: Symbol = symbol_short!("RULE");
const RULE_INDEX: Symbol = symbol_short!("RULE_IDX");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// A stored policy rule.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyRule {
    pub id: u64,
    pub resource: Address,
    pub action: Action,
    pub conditions: Vec<Condition>,
    pub enabled: bool,
    pub created_at: u64,
}

fn rule_key(id: u64) -> (Symbol, u64) {
    (RULE, id)
}

fn index_key(resource: &Address, action: Action) -> (Symbol, Address, Action) {
    (RULE_INDEX, resource.clone(), action)
}

#[contract]
pub struct PolicyCatalogContract;

#[contractimpl]
impl PolicyCatalogContract {
    fn admin(env: &Env) -> Result<Address, PolicyError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(PolicyError::NotInitialized)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), PolicyError> {
        if *caller != Self::admin(env)? {
            return Err(PolicyError::NotAuthorized);
        }
        Ok(())
    }

    fn load_rule(env: &Env, id: u64) -> Option<PolicyRule> {
        env.storage().persistent().get(&rule_key(id))
    }

    fn store_rule(env: &Env, rule: &PolicyRule) {
        let key = rule_key(rule.id);
        env.storage().persistent().set(&key, rule);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }

    fn load_index(env: &Env, resource: &Address, action: Action) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&index_key(resource, action))
            .unwrap_or(Vec::new(env))
    }

    fn store_index(env: &Env, resource: &Address, action: Action, ids: &Vec<u64>) {
        let key = index_key(resource, action);
        env.storage().persistent().set(&key, ids);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }

    /// Initialize the catalog with an admin and the attribute registry the
    /// evaluator reads from.
    pub fn initialize(env: Env, admin: Address, registry: Address) -> Result<(), PolicyError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(PolicyError::AlreadyInitialized);
        }
        if registry == env.current_contract_address() {
            return Err(PolicyError::InvalidDependency);
        }
        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&REGISTRY, &registry);
        env.storage().instance().set(&INITIALIZED, &true);
        events::publish_initialized(&env, admin, registry);
        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, PolicyError> {
        Self::admin(&env)
    }

    pub fn get_registry(env: Env) -> Result<Address, PolicyError> {
        env.storage()
            .instance()
            .get(&REGISTRY)
            .ok_or(PolicyError::NotInitialized)
    }

    /// Propose a new admin. The proposed admin completes the transfer by
    /// calling `accept_admin`.
    pub fn propose_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), PolicyError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        env.storage().instance().set(&PENDING_ADMIN, &new_admin);
        events::publish_admin_proposed(&env, caller, new_admin);
        Ok(())
    }

    /// Complete a pending admin transfer. Only the proposed admin may call.
    pub fn accept_admin(env: Env, caller: Address) -> Result<(), PolicyError> {
        caller.require_auth();
        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(PolicyError::NotAuthorized)?;
        if caller != pending {
            return Err(PolicyError::NotAuthorized);
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

    /// Pauses or resumes catalog mutations. Reads and evaluation are never
    /// paused.
    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), PolicyError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        pausable::set_paused(&env, paused);
        events::publish_paused(&env, caller, paused);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        pausable::is_paused(&env)
    }

    /// Creates a rule and indexes it under `(resource, action)`.
    ///
    /// The rule starts enabled. Fails with `BadPolicyShape`, writing
    /// nothing, when the condition list is empty, longer than 16, or holds
    /// a comparison set with more than 8 members.
    pub fn create_policy(
        env: Env,
        caller: Address,
        resource: Address,
        action: Action,
        conditions: Vec<Condition>,
    ) -> Result<u64, PolicyError> {
        pausable::require_not_paused(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        condition::validate_shape(&conditions)?;

        let id: u64 = env.storage().instance().get(&NEXT_ID).unwrap_or(1);
        env.storage().instance().set(&NEXT_ID, &(id + 1));

        let rule = PolicyRule {
            id,
            resource: resource.clone(),
            action,
            conditions,
            enabled: true,
            created_at: env.ledger().timestamp(),
        };
        Self::store_rule(&env, &rule);

        let mut ids = Self::load_index(&env, &resource, action);
        ids.push_back(id);
        Self::store_index(&env, &resource, action, &ids);

        events::publish_policy_created(&env, id, resource, action, rule.conditions.len());
        Ok(id)
    }

    /// Enables or disables a rule. Disabled rules never match but keep
    /// their place in the index.
    pub fn set_policy_enabled(
        env: Env,
        caller: Address,
        id: u64,
        enabled: bool,
    ) -> Result<(), PolicyError> {
        pausable::require_not_paused(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let mut rule = Self::load_rule(&env, id).ok_or(PolicyError::UnknownPolicy)?;
        rule.enabled = enabled;
        Self::store_rule(&env, &rule);
        events::publish_policy_toggled(&env, id, enabled);
        Ok(())
    }

    /// Deletes a rule: clears its enabled flag and removes its id from the
    /// `(resource, action)` index by swapping the last id into its place.
    ///
    /// The rule record is retained so historical decisions can still be
    /// replayed against it, and its id is never reused. Deleting a rule
    /// whose id is already absent from the index succeeds; only ids that
    /// were never created fail with `UnknownPolicy`.
    pub fn delete_policy(env: Env, caller: Address, id: u64) -> Result<(), PolicyError> {
        pausable::require_not_paused(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let mut rule = Self::load_rule(&env, id).ok_or(PolicyError::UnknownPolicy)?;
        rule.enabled = false;
        Self::store_rule(&env, &rule);

        let mut ids = Self::load_index(&env, &rule.resource, rule.action);
        let mut position: Option<u32> = None;
        for (i, candidate) in ids.iter().enumerate() {
            if candidate == id {
                position = Some(i as u32);
                break;
            }
        }
        if let Some(position) = position {
            let last = ids.len() - 1;
            if position != last {
                let tail = ids.get_unchecked(last);
                ids.set(position, tail);
            }
            ids.pop_back_unchecked();
            Self::store_index(&env, &rule.resource, rule.action, &ids);
        }

        events::publish_policy_deleted(&env, id, rule.resource, rule.action);
        Ok(())
    }

    /// Returns a rule record, including disabled and deleted rules.
    pub fn get_policy(env: Env, id: u64) -> Result<PolicyRule, PolicyError> {
        Self::load_rule(&env, id).ok_or(PolicyError::UnknownPolicy)
    }

    /// Ids of undeleted rules for `(resource, action)`, in insertion order
    /// except where a delete swapped the last id into the gap. The order is
    /// observable: the access manager reports the first matching id.
    pub fn get_policy_ids(env: Env, resource: Address, action: Action) -> Vec<u64> {
        Self::load_index(&env, &resource, action)
    }

    /// Number of rules ever created, including deleted ones.
    pub fn get_policy_count(env: Env) -> u64 {
        let next: u64 = env.storage().instance().get(&NEXT_ID).unwrap_or(1);
        next - 1
    }

    /// Evaluates one condition against a request. Read-only and never
    /// fails; an uninitialized catalog evaluates everything to false.
    pub fn evaluate_condition(
        env: Env,
        cond: Condition,
        subject: Address,
        object: Address,
        env_data: EnvironmentData,
    ) -> bool {
        let Some(registry) = env.storage().instance().get::<_, Address>(&REGISTRY) else {
            return false;
        };
        let registry = AttributeRegistryClient::new(&env, &registry);
        evaluator::evaluate_condition(&env, &registry, &cond, &subject, &object, &env_data)
    }

    /// Evaluates a stored rule against a request. Unknown ids and disabled
    /// rules evaluate to false.
    pub fn evaluate_policy(
        env: Env,
        id: u64,
        subject: Address,
        object: Address,
        env_data: EnvironmentData,
    ) -> bool {
        let Some(registry) = env.storage().instance().get::<_, Address>(&REGISTRY) else {
            return false;
        };
        let Some(rule) = Self::load_rule(&env, id) else {
            return false;
        };
        let registry = AttributeRegistryClient::new(&env, &registry);
        evaluator::evaluate_rule(&env, &registry, &rule, &subject, &object, &env_data)
    }
}
