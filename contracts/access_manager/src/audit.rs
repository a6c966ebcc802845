//! On-chain record of recent authoritative decisions.
//!
//! The event stream is the primary audit channel; this module additionally
//! keeps a bounded ring of recent decision records queryable on-chain, so
//! operators can inspect the tail without an indexer. Records are keyed by
//! a monotonically increasing sequence number and the oldest entry is
//! evicted once the ring is full.

use abac_common::Action;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

const DECISION_LOG: Symbol = symbol_short!("DEC_LOG");
const DECISION_COUNT: Symbol = symbol_short!("DEC_CNT");

/// Number of most recent decisions retained on-chain.
pub const MAX_DECISION_LOG_SIZE: u64 = 100;

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// One authoritative decision, as retained for on-chain inspection.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecisionRecord {
    pub subject: Address,
    pub resource: Address,
    pub action: Action,
    pub permit: bool,
    pub matched_policy: u64,
    pub timestamp: u64,
}

/// Appends a record, evicting the oldest once the ring is full.
pub fn record_decision(env: &Env, record: &DecisionRecord) {
    let count: u64 = env.storage().instance().get(&DECISION_COUNT).unwrap_or(0);
    let next = count + 1;
    env.storage().instance().set(&DECISION_COUNT, &next);

    let key = (DECISION_LOG, next);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

    if next > MAX_DECISION_LOG_SIZE {
        env.storage()
            .persistent()
            .remove(&(DECISION_LOG, next - MAX_DECISION_LOG_SIZE));
    }
}

/// Total number of authoritative decisions ever recorded.
pub fn decision_count(env: &Env) -> u64 {
    env.storage().instance().get(&DECISION_COUNT).unwrap_or(0)
}

/// Returns up to `count` of the most recent decisions, oldest first.
pub fn recent_decisions(env: &Env, count: u64) -> Vec<DecisionRecord> {
    let total = decision_count(env);
    let window = count.min(MAX_DECISION_LOG_SIZE);
    let start = if total > window { total - window + 1 } else { 1 };

    let mut records = Vec::new(env);
    for seq in start..=total {
        if let Some(record) = env.storage().persistent().get(&(DECISION_LOG, seq)) {
            records.push_back(record);
        }
    }
    records
}
