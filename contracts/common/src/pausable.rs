//! Circuit-breaker guard shared by the suite's contracts.

use soroban_sdk::{symbol_short, Env, Symbol};

use crate::CommonError;

const PAUSED: Symbol = symbol_short!("PAUSED");

/// Sets the pause flag. Admin authorization is the caller's responsibility;
/// the guard is auth-agnostic so each contract keeps its own admin model.
pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&PAUSED, &paused);
}

/// Returns `true` when the contract is paused.
pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Guard for state-mutating entry points. Read-only functions do not pause.
pub fn require_not_paused(env: &Env) -> Result<(), CommonError> {
    if is_paused(env) {
        return Err(CommonError::Paused);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use soroban_sdk::{contract, Env};

    use super::*;

    #[contract]
    struct Host;

    #[test]
    fn defaults_to_running() {
        let env = Env::default();
        let contract_id = env.register(Host, ());
        env.as_contract(&contract_id, || {
            assert!(!is_paused(&env));
            assert!(require_not_paused(&env).is_ok());
        });
    }

    #[test]
    fn pause_blocks_until_cleared() {
        let env = Env::default();
        let contract_id = env.register(Host, ());
        env.as_contract(&contract_id, || {
            set_paused(&env, true);
            assert!(is_paused(&env));
            assert_eq!(require_not_paused(&env), Err(CommonError::Paused));

            set_paused(&env, false);
            assert!(require_not_paused(&env).is_ok());
        });
    }
}
