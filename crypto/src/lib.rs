//! Privacy boundary for identity numbers.
//!
//! Everything that leaves the verification core toward the registry
//! collaborator passes through an [`IdentityEncoder`] first.
//!
//! - **Hex** placeholder encoding (reversible, development only)
//! - **X25519** + **ChaCha20-Poly1305** sealed box keyed to the registry's public key
//! - **Blake2b** for key, nonce and ephemeral-secret derivation

pub mod encoder;
pub mod error;
pub mod hash;
pub mod sealed;

pub use encoder::{HexEncoder, IdentityEncoder};
pub use error::CryptoError;
pub use hash::{blake2b_256, blake2b_256_multi};
pub use sealed::{open_sealed, public_key_from_secret, SealedBoxEncoder};
