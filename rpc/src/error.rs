//! Boundary error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kyc_types::{messages, ErrorKind, VerificationResult};
use thiserror::Error;

/// Errors raised at the HTTP boundary.
///
/// `Display` output is for operators; clients only ever see the fixed
/// messages from [`messages`].
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("identity number field is missing or empty")]
    MissingIdentity,

    /// Position only: the parser's own message may quote the input.
    #[error("request body is not valid JSON for this endpoint (line {line}, column {column})")]
    InvalidBody { line: usize, column: usize },

    #[error("query string is not a valid GraphQL request")]
    InvalidQuery,

    #[error("internal server error")]
    Internal,

    #[error("server error: {0}")]
    Server(String),
}

impl RpcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingIdentity | Self::InvalidBody { .. } | Self::InvalidQuery => {
                ErrorKind::Transport
            },
            Self::Internal | Self::Server(_) => ErrorKind::Pipeline,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingIdentity | Self::InvalidBody { .. } | Self::InvalidQuery => {
                StatusCode::BAD_REQUEST
            },
            Self::Internal | Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            Self::MissingIdentity => messages::IDENTITY_REQUIRED,
            Self::InvalidBody { .. } | Self::InvalidQuery => messages::INVALID_BODY,
            Self::Internal | Self::Server(_) => messages::INTERNAL_ERROR,
        }
    }

    pub(crate) fn from_json(err: &serde_json::Error) -> Self {
        Self::InvalidBody {
            line: err.line(),
            column: err.column(),
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let body = VerificationResult::failure(self.public_message());
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_are_client_errors() {
        assert_eq!(RpcError::MissingIdentity.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RpcError::InvalidBody { line: 1, column: 2 }.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RpcError::MissingIdentity.kind(), ErrorKind::Transport);
    }

    #[test]
    fn internal_errors_hide_detail() {
        let err = RpcError::Server("bind failed on 0.0.0.0:3000".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn invalid_body_keeps_position_only() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{\"aadhaar\": 12}x").unwrap_err();
        let err = RpcError::from_json(&parse_err);
        assert!(matches!(err, RpcError::InvalidBody { line: 1, .. }));
        assert!(!err.to_string().contains("12"));
    }
}
