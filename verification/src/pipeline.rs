//! The verification pipeline.
//!
//! `checksum -> encode -> registry lookup -> age -> boolean`. Every failure
//! is turned into a [`VerificationResult`] here and nowhere else; nothing
//! below this module ever sees a `VerificationResult`, and nothing above it
//! ever sees the identity number together with a birth date.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use kyc_crypto::IdentityEncoder;
use kyc_types::{Environment, IdentityNumber, VerificationResult};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::age;
use crate::checksum;
use crate::clock::Clock;
use crate::error::VerificationError;
use crate::registry::BirthDateRegistry;
use crate::stage::PipelineStage;

/// Upper bound on a single registry lookup unless configured otherwise.
pub const DEFAULT_REGISTRY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct VerifierConfig {
    /// How long to wait for the registry before giving up.
    pub registry_timeout: Duration,
    /// Controls whether fault detail is logged.
    pub environment: Environment,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            registry_timeout: DEFAULT_REGISTRY_TIMEOUT,
            environment: Environment::Production,
        }
    }
}

/// Terminal stage and result of one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub stage: PipelineStage,
    pub result: VerificationResult,
}

/// Runs age verifications.
///
/// Holds no per-call state, so one instance can serve any number of
/// concurrent calls.
pub struct AgeVerifier {
    encoder: Arc<dyn IdentityEncoder>,
    registry: Arc<dyn BirthDateRegistry>,
    clock: Arc<dyn Clock>,
    config: VerifierConfig,
}

impl AgeVerifier {
    pub fn new(
        encoder: Arc<dyn IdentityEncoder>,
        registry: Arc<dyn BirthDateRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::with_config(encoder, registry, clock, VerifierConfig::default())
    }

    pub fn with_config(
        encoder: Arc<dyn IdentityEncoder>,
        registry: Arc<dyn BirthDateRegistry>,
        clock: Arc<dyn Clock>,
        config: VerifierConfig,
    ) -> Self {
        Self {
            encoder,
            registry,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    pub fn encoder_name(&self) -> &str {
        self.encoder.name()
    }

    pub fn registry_name(&self) -> &str {
        self.registry.name()
    }

    /// Verify that the holder of `raw_identity` is an adult.
    pub async fn verify_age(&self, raw_identity: &str) -> VerificationResult {
        self.evaluate(raw_identity).await.result
    }

    /// Like [`verify_age`](Self::verify_age), also reporting the terminal stage.
    pub async fn evaluate(&self, raw_identity: &str) -> Evaluation {
        let mut progress = Progress::new();

        let checked = checksum::verify(raw_identity);
        progress.advance(PipelineStage::FormatChecked);
        let identity = match checked {
            Ok(identity) => identity,
            Err(e) => {
                self.diagnose(&VerificationError::from(e));
                progress.advance(PipelineStage::Rejected);
                return progress.finish(VerificationResult::rejected());
            }
        };

        match self.resolve(identity, &mut progress).await {
            Ok(is_adult) => {
                progress.advance(PipelineStage::Completed);
                progress.finish(VerificationResult::completed(is_adult))
            }
            Err(e) => {
                self.diagnose(&e);
                progress.advance(PipelineStage::Errored);
                progress.finish(VerificationResult::errored())
            }
        }
    }

    /// Encode, look up and reduce to a boolean.
    ///
    /// Takes the identity by value: the digits are wiped before the registry
    /// is consulted, and the encoded form is wiped before the age is computed.
    async fn resolve(
        &self,
        identity: IdentityNumber,
        progress: &mut Progress,
    ) -> Result<bool, VerificationError> {
        let encoded = {
            let plaintext = Zeroizing::new(identity.expose());
            drop(identity);
            Zeroizing::new(self.encoder.encode(&plaintext)?)
        };
        progress.advance(PipelineStage::Encoded);

        // A panicking collaborator ends the run as Errored rather than
        // unwinding past the pipeline.
        let timeout = self.config.registry_timeout;
        let lookup =
            AssertUnwindSafe(async { self.registry.resolve_birth_date(&encoded).await })
                .catch_unwind();
        let birth_date = tokio::time::timeout(timeout, lookup)
            .await
            .map_err(|_| VerificationError::RegistryTimeout(timeout))?
            .map_err(|_| VerificationError::RegistryPanicked)??;
        drop(encoded);
        progress.advance(PipelineStage::Resolved);

        age::is_adult(birth_date, self.clock.today())
    }

    fn diagnose(&self, err: &VerificationError) {
        if self.config.environment.diagnostics_enabled() {
            warn!(kind = err.kind().as_str(), error = %err, "age verification did not complete");
        }
    }
}

/// Tracks the current stage of one run.
struct Progress {
    stage: PipelineStage,
}

impl Progress {
    fn new() -> Self {
        Self {
            stage: PipelineStage::Start,
        }
    }

    fn advance(&mut self, next: PipelineStage) {
        debug_assert!(
            self.stage.can_transition_to(next),
            "illegal pipeline transition {} -> {}",
            self.stage,
            next
        );
        debug!(from = %self.stage, to = %next, "pipeline stage");
        self.stage = next;
    }

    fn finish(self, result: VerificationResult) -> Evaluation {
        debug_assert!(self.stage.is_terminal());
        Evaluation {
            stage: self.stage,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DevRegistry;
    use crate::clock::SystemClock;
    use kyc_crypto::HexEncoder;

    fn verifier() -> AgeVerifier {
        AgeVerifier::new(
            Arc::new(HexEncoder),
            Arc::new(DevRegistry),
            Arc::new(SystemClock),
        )
    }

    #[tokio::test]
    async fn invalid_number_is_rejected() {
        let eval = verifier().evaluate("123456789012").await;
        assert_eq!(eval.stage, PipelineStage::Rejected);
        assert_eq!(eval.result, VerificationResult::rejected());
    }

    #[tokio::test]
    async fn valid_number_completes_with_dev_registry() {
        let eval = verifier().evaluate("123456789010").await;
        assert_eq!(eval.stage, PipelineStage::Completed);
        assert!(eval.result.success);
        assert!(eval.result.is_adult.is_some());
    }

    #[test]
    fn default_config_is_production() {
        let config = VerifierConfig::default();
        assert_eq!(config.registry_timeout, DEFAULT_REGISTRY_TIMEOUT);
        assert!(!config.environment.diagnostics_enabled());
    }
}
