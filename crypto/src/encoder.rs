//! The privacy boundary seam.

use crate::error::CryptoError;

/// A one-way boundary for identity numbers.
///
/// After `encode` returns, callers must treat the plaintext as spent: it may
/// not be written to any log, error message or persisted record. Encoding is
/// deterministic per input and implementations hold no mutable state.
pub trait IdentityEncoder: Send + Sync {
    /// Human-readable name of this encoder.
    fn name(&self) -> &str;

    /// Produce the opaque representation sent to the registry collaborator.
    fn encode(&self, plaintext: &str) -> Result<String, CryptoError>;
}

/// Reversible hex encoding.
///
/// A stand-in for development: it marks the boundary but provides no
/// confidentiality. Use [`crate::SealedBoxEncoder`] in production.
#[derive(Clone, Copy, Debug, Default)]
pub struct HexEncoder;

impl IdentityEncoder for HexEncoder {
    fn name(&self) -> &str {
        "hex"
    }

    fn encode(&self, plaintext: &str) -> Result<String, CryptoError> {
        Ok(hex::encode(plaintext.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_encoding_is_deterministic() {
        let enc = HexEncoder;
        let a = enc.encode("123456789012").unwrap();
        let b = enc.encode("123456789012").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "313233343536373839303132");
    }

    #[test]
    fn hex_output_does_not_contain_plaintext() {
        let out = HexEncoder.encode("999999999999").unwrap();
        assert!(!out.contains("999999999999"));
    }
}
