//! Fundamental types for the age verification core.
//!
//! This crate defines the values shared by every other crate in the workspace:
//! the identity number wrapper, the verification result that leaves the core,
//! the error taxonomy and the deployment environment.

pub mod environment;
pub mod error;
pub mod identity;
pub mod result;

pub use environment::Environment;
pub use error::{ErrorKind, FormatError};
pub use identity::{IdentityNumber, IDENTITY_NUMBER_LEN};
pub use result::{messages, VerificationResult};
