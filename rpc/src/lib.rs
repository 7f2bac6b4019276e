//! HTTP boundary for the age verification pipeline.
//!
//! Provides endpoints for:
//! - `POST /api/kyc/verify`: JSON `{ "aadhaar": "..." }` in, verification result out
//! - `POST /api/graphql`: the same operation as the `verifyAge` mutation
//! - `GET /api/graphql`: read-only queries (`status`); mutations are refused
//! - `GET /api/kyc/stats`: outcome counters
//! - `GET /health`: liveness probe
//!
//! Nothing here inspects or logs the identity number; it is handed to the
//! pipeline untouched and only the result comes back.

pub mod error;
pub mod graphql;
pub mod handlers;
pub mod server;

pub use error::RpcError;
pub use graphql::{build_query_schema, build_schema, KycQuerySchema, KycSchema};
pub use server::{router, AppState, RpcServer};
