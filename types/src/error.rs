//! Error taxonomy shared across crates.

use serde::Serialize;
use thiserror::Error;

/// The three kinds of failure a caller can observe.
///
/// All of them are recoverable by the caller; none of them crash the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Checksum or structure validation failed. Resubmit a valid number.
    Format,
    /// The encode / resolve sequence failed. Retrying may help.
    Pipeline,
    /// Malformed request body or missing field at the boundary.
    Transport,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Pipeline => "pipeline",
            Self::Transport => "transport",
        }
    }

    /// Whether resubmitting the same input can ever succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Pipeline)
    }
}

/// Why a string is not a structurally valid identity number.
///
/// Deliberately carries lengths only, never the offending characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected 12 digits, found {found}")]
    WrongLength { found: usize },

    #[error("check digit mismatch")]
    ChecksumMismatch,
}

impl FormatError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Format
    }
}
