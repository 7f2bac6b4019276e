//! The only value that crosses back out of the verification core.

use serde::{Deserialize, Serialize};

/// Fixed user-visible status messages.
///
/// None of them may ever be built from request data.
pub mod messages {
    pub const INVALID_FORMAT: &str = "Invalid identity number format";
    pub const COMPLETED: &str = "Age verification completed successfully";
    pub const FAILED: &str = "Failed to verify age. Please try again.";
    pub const IDENTITY_REQUIRED: &str = "Aadhaar number is required";
    pub const INVALID_BODY: &str = "Invalid request body";
    pub const INTERNAL_ERROR: &str = "Internal server error";
}

/// Outcome of one verification call.
///
/// `success` reports whether the pipeline ran to completion, which is
/// distinct from the age outcome carried in `is_adult`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_adult: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerificationResult {
    /// The pipeline completed and resolved an age flag.
    pub fn completed(is_adult: bool) -> Self {
        Self {
            success: true,
            is_adult: Some(is_adult),
            message: Some(messages::COMPLETED.to_string()),
        }
    }

    /// The identity number failed structural validation.
    pub fn rejected() -> Self {
        Self::failure(messages::INVALID_FORMAT)
    }

    /// The encode / resolve sequence failed.
    pub fn errored() -> Self {
        Self::failure(messages::FAILED)
    }

    /// A failure with one of the fixed [`messages`].
    pub fn failure(message: &'static str) -> Self {
        Self {
            success: false,
            is_adult: None,
            message: Some(message.to_string()),
        }
    }
}
