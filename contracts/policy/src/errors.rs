use soroban_sdk::contracterror;

use abac_common::CommonError;

/// Policy catalog error codes, following the suite's shared ranges.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PolicyError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotAuthorized = 10,
    /// The rule id was never created.
    UnknownPolicy = 20,
    /// Zero conditions, more than 16 conditions, or a comparison set with
    /// more than 8 members.
    BadPolicyShape = 30,
    /// A collaborator address points back at this contract.
    InvalidDependency = 31,
    Paused = 40,
}

impl From<CommonError> for PolicyError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::NotInitialized => PolicyError::NotInitialized,
            CommonError::AlreadyInitialized => PolicyError::AlreadyInitialized,
            CommonError::Paused => PolicyError::Paused,
        }
    }
}
