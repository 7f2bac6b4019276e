//! Request handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::RpcError;
use crate::server::AppState;

// ── Verification ─────────────────────────────────────────────────────────

/// Body of `POST /api/kyc/verify`. Wiped on drop.
#[derive(Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct VerifyRequest {
    #[serde(default)]
    pub aadhaar: Option<String>,
}

pub async fn verify(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    state.stats.increment("requests");

    let request: VerifyRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => return state.transport_error(RpcError::from_json(&e)),
    };
    let raw = match request.aadhaar.as_deref() {
        Some(raw) if !raw.is_empty() => raw,
        _ => return state.transport_error(RpcError::MissingIdentity),
    };

    let evaluation = state.verifier.evaluate(raw).await;
    state.record(evaluation.stage);

    let status = if evaluation.result.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(evaluation.result)).into_response()
}

// ── GraphQL ──────────────────────────────────────────────────────────────

pub async fn graphql(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request: async_graphql::Request = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            state.stats.increment("requests");
            return state.transport_error(RpcError::from_json(&e));
        }
    };
    Json(state.schema.execute(request).await).into_response()
}

/// `GET /api/graphql?query=...`, executed against the query-only schema.
pub async fn graphql_get(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Response {
    let raw = query.unwrap_or_default();
    let request = match async_graphql::http::parse_query_string(&raw) {
        Ok(request) => request,
        Err(_) => {
            state.stats.increment("requests");
            return state.transport_error(RpcError::InvalidQuery);
        }
    };
    Json(state.query_schema.execute(request).await).into_response()
}

// ── Operations ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.stats.snapshot())
}

impl AppState {
    fn transport_error(&self, err: RpcError) -> Response {
        self.stats.increment("transport_errors");
        if self.environment.diagnostics_enabled() {
            warn!(kind = err.kind().as_str(), error = %err, "rejected request");
        }
        err.into_response()
    }
}
