use soroban_sdk::contracterror;

use abac_common::CommonError;

/// Access manager error codes, following the suite's shared ranges.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AccessError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotAuthorized = 10,
    /// The environment oracle rejected the supplied environment record; no
    /// decision was made and no decision event was published.
    EnvVerificationFailed = 11,
    /// A collaborator address points back at this contract.
    InvalidDependency = 31,
    Paused = 40,
}

impl From<CommonError> for AccessError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::NotInitialized => AccessError::NotInitialized,
            CommonError::AlreadyInitialized => AccessError::AlreadyInitialized,
            CommonError::Paused => AccessError::Paused,
        }
    }
}
