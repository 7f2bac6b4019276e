use thiserror::Error;

/// Failures at the privacy boundary.
///
/// Variants never carry plaintext.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid public key: {0}")]
    InvalidKey(String),

    #[error("sealed payload is malformed")]
    MalformedPayload,

    #[error("decryption failed: authentication check failed")]
    AuthenticationFailed,

    #[error("encryption failed")]
    EncryptionFailed,
}
