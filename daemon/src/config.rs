//! Service configuration with TOML file support.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use kyc_crypto::{HexEncoder, IdentityEncoder, SealedBoxEncoder};
use kyc_types::Environment;
use kyc_utils::LogFormat;
use kyc_verification::VerifierConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Which privacy boundary to put in front of the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncoderKind {
    /// Reversible hex placeholder.
    #[default]
    Hex,
    /// Sealed box keyed to `registry_public_key`.
    Sealed,
}

impl FromStr for EncoderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "sealed" => Ok(Self::Sealed),
            other => Err(format!("unknown encoder: {other}")),
        }
    }
}

/// Configuration for the verification service.
///
/// Loaded from a TOML file via [`ServiceConfig::from_toml_file`] or built
/// programmatically; every field has a default.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address to bind the HTTP server to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment; only `development` logs fault detail.
    #[serde(default)]
    pub environment: Environment,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Upper bound on a registry lookup, in milliseconds.
    #[serde(default = "default_registry_timeout_ms")]
    pub registry_timeout_ms: u64,

    /// Privacy boundary implementation.
    #[serde(default)]
    pub encoder: EncoderKind,

    /// Registry X25519 public key, hex. Required for the sealed encoder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_public_key: Option<String>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_registry_timeout_ms() -> u64 {
    10_000
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ServiceConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reject settings the service cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registry_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "registry_timeout_ms must be greater than zero".into(),
            ));
        }
        if self.encoder == EncoderKind::Sealed && self.registry_public_key.is_none() {
            return Err(ConfigError::Invalid(
                "encoder = \"sealed\" requires registry_public_key".into(),
            ));
        }
        self.build_encoder().map(|_| ())
    }

    pub fn registry_timeout(&self) -> Duration {
        Duration::from_millis(self.registry_timeout_ms)
    }

    pub fn verifier_config(&self) -> VerifierConfig {
        VerifierConfig {
            registry_timeout: self.registry_timeout(),
            environment: self.environment,
        }
    }

    /// Instantiate the configured privacy boundary.
    pub fn build_encoder(&self) -> Result<Arc<dyn IdentityEncoder>, ConfigError> {
        match self.encoder {
            EncoderKind::Hex => Ok(Arc::new(HexEncoder)),
            EncoderKind::Sealed => {
                let key = self.registry_public_key.as_deref().ok_or_else(|| {
                    ConfigError::Invalid("registry_public_key is not set".into())
                })?;
                let encoder = SealedBoxEncoder::from_hex(key)
                    .map_err(|e| ConfigError::Invalid(e.to_string()))?;
                Ok(Arc::new(encoder))
            }
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            environment: Environment::default(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            registry_timeout_ms: default_registry_timeout_ms(),
            encoder: EncoderKind::default(),
            registry_public_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const KEY: &str = "0101010101010101010101010101010101010101010101010101010101010101";

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ServiceConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = ServiceConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.port, config.port);
        assert_eq!(parsed.environment, Environment::Production);
        assert_eq!(parsed.encoder, EncoderKind::Hex);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = ServiceConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.registry_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            port = 8080
            environment = "development"
            log_format = "json"
        "#;
        let config = ServiceConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "info");
        assert!(config.verifier_config().environment.diagnostics_enabled());
    }

    #[test]
    fn unknown_environment_is_a_parse_error() {
        let err = ServiceConfig::from_toml_str("environment = \"staging\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn sealed_encoder_requires_key() {
        let config = ServiceConfig::from_toml_str("encoder = \"sealed\"").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = ServiceConfig {
            encoder: EncoderKind::Sealed,
            registry_public_key: Some("not-hex".into()),
            ..ServiceConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = ServiceConfig {
            encoder: EncoderKind::Sealed,
            registry_public_key: Some(KEY.into()),
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.build_encoder().unwrap().name(), "sealed");
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let config = ServiceConfig {
            registry_timeout_ms: 0,
            ..ServiceConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 4000\nregistry_timeout_ms = 250").unwrap();
        let config = ServiceConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.registry_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn missing_file_returns_io_error() {
        let result = ServiceConfig::from_toml_file(Path::new("/nonexistent/kyc.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
