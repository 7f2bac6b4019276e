//! Axum-based HTTP server.

use std::any::Any;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use kyc_types::Environment;
use kyc_utils::StatsCounter;
use kyc_verification::{AgeVerifier, PipelineStage};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info};

use crate::error::RpcError;
use crate::graphql::{build_query_schema, build_schema, KycQuerySchema, KycSchema};
use crate::handlers;

/// Names of the outcome counters exposed at `/api/kyc/stats`.
pub const COUNTERS: &[&str] = &[
    "requests",
    "completed",
    "rejected",
    "errored",
    "transport_errors",
];

/// Shared state for every handler.
pub struct AppState {
    pub verifier: Arc<AgeVerifier>,
    pub stats: Arc<StatsCounter>,
    pub environment: Environment,
    pub schema: KycSchema,
    pub query_schema: KycQuerySchema,
}

impl AppState {
    pub fn new(verifier: Arc<AgeVerifier>, environment: Environment) -> Self {
        let stats = Arc::new(StatsCounter::new(COUNTERS));
        let schema = build_schema(verifier.clone(), stats.clone());
        Self {
            verifier,
            stats,
            environment,
            schema,
            query_schema: build_query_schema(),
        }
    }

    pub(crate) fn record(&self, stage: PipelineStage) {
        record_stage(&self.stats, stage);
    }
}

pub(crate) fn record_stage(stats: &StatsCounter, stage: PipelineStage) {
    match stage {
        PipelineStage::Completed => stats.increment("completed"),
        PipelineStage::Rejected => stats.increment("rejected"),
        PipelineStage::Errored => stats.increment("errored"),
        _ => {}
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/kyc/verify", post(handlers::verify))
        .route("/api/graphql", post(handlers::graphql).get(handlers::graphql_get))
        .route("/api/kyc/stats", get(handlers::stats))
        .route("/health", get(handlers::health))
        .layer(CatchPanicLayer::custom(internal_fault))
        .with_state(state)
}

/// Any panic below the boundary becomes a bare 500.
fn internal_fault(_payload: Box<dyn Any + Send + 'static>) -> Response {
    error!("request handler panicked");
    RpcError::Internal.into_response()
}

/// The HTTP server, configured with an address and shared state.
pub struct RpcServer {
    pub bind_address: String,
    pub port: u16,
    state: Arc<AppState>,
}

impl RpcServer {
    pub fn new(
        bind_address: impl Into<String>,
        port: u16,
        verifier: Arc<AgeVerifier>,
        environment: Environment,
    ) -> Self {
        Self {
            bind_address: bind_address.into(),
            port,
            state: Arc::new(AppState::new(verifier, environment)),
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }

    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Bind and serve until SIGINT or SIGTERM.
    pub async fn start(&self) -> Result<(), RpcError> {
        let addr = format!("{}:{}", self.bind_address, self.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| RpcError::Server(format!("failed to bind {addr}: {e}")))?;
        info!(
            "HTTP server listening on {} ({} environment)",
            addr, self.state.environment
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolves on SIGINT, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to listen for SIGINT: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { info!("received SIGINT, shutting down"); }
        _ = terminate => { info!("received SIGTERM, shutting down"); }
    }
}
