//! GraphQL schema exposing the verification pipeline as one mutation.
//!
//! ```graphql
//! type Query { status: String! }
//! type Mutation { verifyAge(aadhaar: String!): VerificationResult! }
//! type VerificationResult { success: Boolean! isAdult: Boolean message: String }
//! ```

use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema, SimpleObject};
use kyc_types::VerificationResult;
use kyc_utils::StatsCounter;
use kyc_verification::AgeVerifier;

use crate::server::record_stage;

pub type KycSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Query-only schema served over GET, so identity numbers never travel in a URL.
pub type KycQuerySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub const STATUS: &str = "Age verification GraphQL API is running";

/// GraphQL view of [`VerificationResult`].
#[derive(SimpleObject)]
#[graphql(name = "VerificationResult")]
pub struct VerificationResultObject {
    pub success: bool,
    pub is_adult: Option<bool>,
    pub message: Option<String>,
}

impl From<VerificationResult> for VerificationResultObject {
    fn from(result: VerificationResult) -> Self {
        Self {
            success: result.success,
            is_adult: result.is_adult,
            message: result.message,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn status(&self) -> String {
        STATUS.to_string()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn verify_age(
        &self,
        ctx: &Context<'_>,
        aadhaar: String,
    ) -> async_graphql::Result<VerificationResultObject> {
        let verifier = ctx.data::<Arc<AgeVerifier>>()?;
        let stats = ctx.data::<Arc<StatsCounter>>()?;
        stats.increment("requests");

        let evaluation = verifier.evaluate(&aadhaar).await;
        record_stage(stats, evaluation.stage);
        Ok(evaluation.result.into())
    }
}

pub fn build_schema(verifier: Arc<AgeVerifier>, stats: Arc<StatsCounter>) -> KycSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(verifier)
        .data(stats)
        .finish()
}

pub fn build_query_schema() -> KycQuerySchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription).finish()
}
