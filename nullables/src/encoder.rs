//! Nullable encoder: counts and optionally fails encode calls.

use kyc_crypto::{CryptoError, HexEncoder, IdentityEncoder};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// A privacy boundary double that records how often it was crossed.
///
/// Delegates to [`HexEncoder`] unless told to fail.
pub struct NullEncoder {
    calls: AtomicUsize,
    fail: AtomicBool,
}

impl NullEncoder {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    /// An encoder whose every call fails.
    pub fn failing() -> Self {
        let encoder = Self::new();
        encoder.set_failing(true);
        encoder
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of `encode` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for NullEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityEncoder for NullEncoder {
    fn name(&self) -> &str {
        "null-encoder"
    }

    fn encode(&self, plaintext: &str) -> Result<String, CryptoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(CryptoError::EncryptionFailed);
        }
        HexEncoder.encode(plaintext)
    }
}
