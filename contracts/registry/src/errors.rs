use soroban_sdk::contracterror;

use abac_common::CommonError;

/// Registry error codes, following the suite's shared ranges.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is neither the subject (for self-declared attributes) nor the
    /// admin.
    NotAuthorized = 10,
    /// Batch keys and values differ in length; nothing was written.
    LengthMismatch = 30,
    Paused = 40,
}

impl From<CommonError> for RegistryError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::NotInitialized => RegistryError::NotInitialized,
            CommonError::AlreadyInitialized => RegistryError::AlreadyInitialized,
            CommonError::Paused => RegistryError::Paused,
        }
    }
}
