//! Deterministic sealed box keyed to the registry's public key.
//!
//! The ephemeral X25519 secret is derived from Blake2b over the recipient
//! key and the plaintext, so the same identity number always seals to the
//! same payload. The derived secret is zeroized as soon as the shared key
//! has been computed; the encoder retains nothing but the recipient key.
//!
//! Wire format (hex): `ephemeral_public (32) || ciphertext || tag (16)`.
//!
//! Determinism costs confidentiality against anyone who knows the recipient
//! public key. The plaintext space is about 10^11 valid numbers, so such a
//! party can confirm a guessed identity, or enumerate all of them, by
//! recomputing `ephemeral_public` and comparing. The box protects the number
//! in transit only from parties without the registry public key; treat that
//! key as confidential to the service and the registry.

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use x25519_dalek::{PublicKey as X25519Public, StaticSecret};
use zeroize::{Zeroize, Zeroizing};

use crate::encoder::IdentityEncoder;
use crate::error::CryptoError;
use crate::hash::blake2b_256_multi;

const EPHEMERAL_DOMAIN: &[u8] = b"kyc-sealed-ephemeral";
const KEY_DOMAIN: &[u8] = b"kyc-sealed-key";
const TAG_LEN: usize = 16;

/// Seals identity numbers to a registry public key.
#[derive(Clone, Debug)]
pub struct SealedBoxEncoder {
    recipient: [u8; 32],
}

impl SealedBoxEncoder {
    pub fn new(recipient_public: [u8; 32]) -> Self {
        Self {
            recipient: recipient_public,
        }
    }

    /// Parse a 64-character hex X25519 public key.
    pub fn from_hex(recipient_public_hex: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(recipient_public_hex.trim())
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        let key: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            CryptoError::InvalidKey(format!("expected 32 bytes, got {}", v.len()))
        })?;
        Ok(Self::new(key))
    }

    pub fn recipient(&self) -> &[u8; 32] {
        &self.recipient
    }
}

impl IdentityEncoder for SealedBoxEncoder {
    fn name(&self) -> &str {
        "sealed"
    }

    fn encode(&self, plaintext: &str) -> Result<String, CryptoError> {
        let mut eph_bytes =
            blake2b_256_multi(&[EPHEMERAL_DOMAIN, &self.recipient, plaintext.as_bytes()]);
        let ephemeral = StaticSecret::from(eph_bytes);
        eph_bytes.zeroize();

        let ephemeral_pub = X25519Public::from(&ephemeral);
        let recipient_pub = X25519Public::from(self.recipient);
        let shared = ephemeral.diffie_hellman(&recipient_pub);

        let cipher = cipher_for(shared.as_bytes(), ephemeral_pub.as_bytes(), &self.recipient)?;
        let nonce = nonce_for(ephemeral_pub.as_bytes(), &self.recipient);
        let ciphertext = cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|_| CryptoError::EncryptionFailed)?;

        let mut sealed = Vec::with_capacity(32 + ciphertext.len());
        sealed.extend_from_slice(ephemeral_pub.as_bytes());
        sealed.extend_from_slice(&ciphertext);
        Ok(hex::encode(sealed))
    }
}

/// Open a payload produced by [`SealedBoxEncoder`]. Registry side.
pub fn open_sealed(
    sealed_hex: &str,
    recipient_secret: &[u8; 32],
) -> Result<Zeroizing<String>, CryptoError> {
    let sealed = hex::decode(sealed_hex).map_err(|_| CryptoError::MalformedPayload)?;
    if sealed.len() < 32 + TAG_LEN {
        return Err(CryptoError::MalformedPayload);
    }
    let (eph, ciphertext) = sealed.split_at(32);
    let mut eph_bytes = [0u8; 32];
    eph_bytes.copy_from_slice(eph);

    let secret = StaticSecret::from(*recipient_secret);
    let recipient_pub = X25519Public::from(&secret);
    let shared = secret.diffie_hellman(&X25519Public::from(eph_bytes));

    let cipher = cipher_for(shared.as_bytes(), &eph_bytes, recipient_pub.as_bytes())?;
    let nonce = nonce_for(&eph_bytes, recipient_pub.as_bytes());
    let plaintext = cipher
        .decrypt(&nonce, ciphertext)
        .map_err(|_| CryptoError::AuthenticationFailed)?;

    String::from_utf8(plaintext)
        .map(Zeroizing::new)
        .map_err(|_| CryptoError::MalformedPayload)
}

/// X25519 public key for a secret. Used to provision test registries.
pub fn public_key_from_secret(secret: &[u8; 32]) -> [u8; 32] {
    X25519Public::from(&StaticSecret::from(*secret)).to_bytes()
}

fn cipher_for(
    shared: &[u8; 32],
    ephemeral_pub: &[u8; 32],
    recipient_pub: &[u8; 32],
) -> Result<ChaCha20Poly1305, CryptoError> {
    let sym_key = Zeroizing::new(blake2b_256_multi(&[
        shared,
        ephemeral_pub,
        recipient_pub,
        KEY_DOMAIN,
    ]));
    ChaCha20Poly1305::new_from_slice(&sym_key[..]).map_err(|_| CryptoError::EncryptionFailed)
}

fn nonce_for(ephemeral_pub: &[u8; 32], recipient_pub: &[u8; 32]) -> Nonce {
    let digest = blake2b_256_multi(&[ephemeral_pub, recipient_pub]);
    let mut nonce_bytes = [0u8; 12];
    nonce_bytes.copy_from_slice(&digest[..12]);
    Nonce::from(nonce_bytes)
}
