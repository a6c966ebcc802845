//! Decision-time environment attributes.

use soroban_sdk::{contracttype, BytesN, Env, U256};

use crate::{hash_name, number_to_value, zero_value};

/// Reference `time_window` encoding: regular working hours.
pub const TIME_WINDOW_WORKING_HOURS: u32 = 0;
/// Reference `time_window` encoding: outside working hours.
pub const TIME_WINDOW_OFF_HOURS: u32 = 1;

/// Ambient attributes supplied by the caller for a single decision.
///
/// The record is never stored; it exists only for the duration of one
/// access check. `time_window` conventionally holds 0-255 (0 and 1 carry
/// the reference meanings above, other values are permitted but have no
/// predefined meaning); `system_load` is conventionally 0-100.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnvironmentData {
    pub time_window: u32,
    pub emergency_mode: bool,
    pub system_load: U256,
}

/// Key under which conditions address the `time_window` field.
pub fn time_window_key(env: &Env) -> BytesN<32> {
    hash_name(env, "timeWindow")
}

/// Key under which conditions address the `emergency_mode` field.
pub fn emergency_mode_key(env: &Env) -> BytesN<32> {
    hash_name(env, "emergencyMode")
}

/// Key under which conditions address the `system_load` field.
pub fn system_load_key(env: &Env) -> BytesN<32> {
    hash_name(env, "systemLoad")
}

/// Resolves an environment attribute to its opaque 32-byte value.
///
/// Exactly three keys resolve today; adding a field is a change to this
/// resolver only. Unknown keys read as the all-zero value rather than
/// failing, which leaves the environment source open to future fields.
pub fn resolve(env: &Env, data: &EnvironmentData, key: &BytesN<32>) -> BytesN<32> {
    if *key == time_window_key(env) {
        number_to_value(env, &U256::from_u32(env, data.time_window))
    } else if *key == emergency_mode_key(env) {
        let flag = if data.emergency_mode { 1 } else { 0 };
        number_to_value(env, &U256::from_u32(env, flag))
    } else if *key == system_load_key(env) {
        number_to_value(env, &data.system_load)
    } else {
        zero_value(env)
    }
}

#[cfg(test)]
mod test {
    use soroban_sdk::{Env, U256};

    use super::*;
    use crate::value_to_number;

    fn sample(env: &Env) -> EnvironmentData {
        EnvironmentData {
            time_window: TIME_WINDOW_OFF_HOURS,
            emergency_mode: true,
            system_load: U256::from_u32(env, 73),
        }
    }

    #[test]
    fn resolves_time_window() {
        let env = Env::default();
        let value = resolve(&env, &sample(&env), &time_window_key(&env));
        assert_eq!(value_to_number(&env, &value), U256::from_u32(&env, 1));
    }

    #[test]
    fn resolves_emergency_mode_as_flag() {
        let env = Env::default();
        let mut data = sample(&env);
        let value = resolve(&env, &data, &emergency_mode_key(&env));
        assert_eq!(value_to_number(&env, &value), U256::from_u32(&env, 1));

        data.emergency_mode = false;
        let value = resolve(&env, &data, &emergency_mode_key(&env));
        assert_eq!(value_to_number(&env, &value), U256::from_u32(&env, 0));
    }

    #[test]
    fn resolves_system_load() {
        let env = Env::default();
        let value = resolve(&env, &sample(&env), &system_load_key(&env));
        assert_eq!(value_to_number(&env, &value), U256::from_u32(&env, 73));
    }

    #[test]
    fn unknown_key_reads_zero() {
        let env = Env::default();
        let key = hash_name(&env, "humidity");
        assert_eq!(resolve(&env, &sample(&env), &key), zero_value(&env));
    }
}
