//! Age verification daemon entry point.

mod config;

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use kyc_rpc::RpcServer;
use kyc_types::Environment;
use kyc_utils::LogFormat;
use kyc_verification::{AgeVerifier, DevRegistry, SystemClock};
use zeroize::Zeroizing;

use crate::config::{EncoderKind, ServiceConfig};

#[derive(Parser)]
#[command(name = "kyc-daemon", about = "Privacy-preserving age verification service")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, env = "KYC_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind the HTTP server to.
    #[arg(long, env = "KYC_BIND_ADDRESS")]
    bind_address: Option<String>,

    /// HTTP port.
    #[arg(long, env = "KYC_PORT")]
    port: Option<u16>,

    /// Deployment environment: "development" or "production".
    #[arg(long, env = "KYC_ENV")]
    environment: Option<Environment>,

    /// Log format: "human" or "json".
    #[arg(long, env = "KYC_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "KYC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Registry lookup timeout in milliseconds.
    #[arg(long, env = "KYC_REGISTRY_TIMEOUT_MS")]
    registry_timeout_ms: Option<u64>,

    /// Privacy boundary: "hex" or "sealed".
    #[arg(long, env = "KYC_ENCODER")]
    encoder: Option<EncoderKind>,

    /// Registry X25519 public key (hex), for the sealed encoder.
    #[arg(long, env = "KYC_REGISTRY_PUBLIC_KEY")]
    registry_public_key: Option<String>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve,
    /// Run one verification and print the result as JSON.
    ///
    /// The identity number is read from the first line of stdin so it does
    /// not end up in shell history or the process list.
    Verify,
}

impl Cli {
    /// Overlay flags and env vars on top of the file (or default) config.
    fn merge_into(&self, base: ServiceConfig) -> ServiceConfig {
        ServiceConfig {
            bind_address: self.bind_address.clone().unwrap_or(base.bind_address),
            port: self.port.unwrap_or(base.port),
            environment: self.environment.unwrap_or(base.environment),
            log_format: self.log_format.unwrap_or(base.log_format),
            log_level: self.log_level.clone().unwrap_or(base.log_level),
            registry_timeout_ms: self.registry_timeout_ms.unwrap_or(base.registry_timeout_ms),
            encoder: self.encoder.unwrap_or(base.encoder),
            registry_public_key: self
                .registry_public_key
                .clone()
                .or(base.registry_public_key),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let base = match cli.config {
        Some(ref path) => ServiceConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServiceConfig::default(),
    };
    let config = cli.merge_into(base);
    config.validate().context("validating configuration")?;

    if let Err(e) = kyc_utils::init_logging(config.log_format, &config.log_level) {
        eprintln!("logging already initialised: {e}");
    }
    if let Some(ref path) = cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let verifier = Arc::new(build_verifier(&config)?);

    match cli.command {
        Command::Serve => {
            tracing::info!(
                "Starting age verification service on {}:{} (encoder: {}, registry: {}, timeout: {}ms)",
                config.bind_address,
                config.port,
                verifier.encoder_name(),
                verifier.registry_name(),
                config.registry_timeout_ms,
            );
            let server = RpcServer::new(
                config.bind_address.clone(),
                config.port,
                verifier,
                config.environment,
            );
            server.start().await?;
            tracing::info!("age verification daemon exited cleanly");
        }
        Command::Verify => {
            let raw = read_identity(std::io::stdin().lock())?;
            let result = verifier.verify_age(raw.trim()).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

fn build_verifier(config: &ServiceConfig) -> anyhow::Result<AgeVerifier> {
    let encoder = config.build_encoder()?;
    if config.encoder == EncoderKind::Hex && config.environment == Environment::Production {
        tracing::warn!(
            "hex encoder provides no confidentiality; set encoder = \"sealed\" for production"
        );
    }
    tracing::warn!("no identity registry is wired in; using the development placeholder registry");

    Ok(AgeVerifier::with_config(
        encoder,
        Arc::new(DevRegistry),
        Arc::new(SystemClock),
        config.verifier_config(),
    ))
}

/// First line of `input`, wiped from memory when dropped.
fn read_identity(mut input: impl BufRead) -> anyhow::Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    input
        .read_line(&mut line)
        .context("reading identity number from stdin")?;
    Ok(line)
}
