//! Age verification core.
//!
//! Answers one question, "is the holder of this identity number an adult?",
//! without retaining anything else:
//! 1. **Checksum**: the number must be 12 digits satisfying the Verhoeff scheme.
//! 2. **Privacy boundary**: the number is encoded before it leaves the core.
//! 3. **Registry**: an external collaborator resolves the encoded number to a birth date.
//! 4. **Age**: the birth date becomes a boolean and everything else is dropped.
//!
//! The registry is a seam. [`DevRegistry`] is a development stand-in, not a
//! source of truth.

pub mod age;
pub mod checksum;
pub mod clock;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod stage;

pub use age::{age_from_birth_date, is_adult, ADULT_AGE};
pub use clock::{Clock, SystemClock};
pub use error::{RegistryError, VerificationError};
pub use pipeline::{AgeVerifier, Evaluation, VerifierConfig, DEFAULT_REGISTRY_TIMEOUT};
pub use registry::{BirthDateRegistry, DevRegistry};
pub use stage::PipelineStage;
