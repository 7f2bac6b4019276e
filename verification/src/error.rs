use std::time::Duration;

use kyc_crypto::CryptoError;
use kyc_types::{ErrorKind, FormatError};
use thiserror::Error;

/// Failures reported by a registry collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("registry unavailable: {0}")]
    Unavailable(String),

    #[error("malformed registry response: {0}")]
    MalformedResponse(String),

    #[error("registry has no record for this identity")]
    NotFound,
}

/// Why a verification did not complete.
///
/// No variant carries the identity number, its encoding or a birth date.
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("invalid identity number: {0}")]
    Format(#[from] FormatError),

    #[error("privacy boundary failed: {0}")]
    Encoding(#[from] CryptoError),

    #[error("registry lookup failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("registry did not answer within {0:?}")]
    RegistryTimeout(Duration),

    #[error("registry lookup panicked")]
    RegistryPanicked,

    #[error("registry returned a birth date after the reference date")]
    ImplausibleBirthDate,
}

impl VerificationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Format(_) => ErrorKind::Format,
            Self::Encoding(_)
            | Self::Registry(_)
            | Self::RegistryTimeout(_)
            | Self::RegistryPanicked
            | Self::ImplausibleBirthDate => ErrorKind::Pipeline,
        }
    }
}
