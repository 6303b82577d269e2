//! User Registry — CLI Server
//!
//! ```sh
//! # Run with default config (~/.config/user-registry/config.toml)
//! user-registry
//!
//! # Custom config path and port
//! user-registry --config ./config.toml --port 8080
//!
//! # Start with an empty registry
//! user-registry --no-seed
//!
//! # Validate config without starting
//! user-registry --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use user_registry::config::{AppConfig, ConfigError, CONFIG_ENV};
use user_registry::server::{init_tracing, ServerHandle, ServerOptions};

/// In-memory user registry with a REST API.
#[derive(Parser, Debug)]
#[command(
    name = "user-registry",
    version,
    about = "REST API for managing users",
    long_about = "In-memory user registry exposing create, read, update and delete \
                  operations over HTTP, with Swagger UI at /docs.\n\n\
                  Default config: ~/.config/user-registry/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Override the listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Start with an empty registry instead of the fixture users.
    #[arg(long)]
    no_seed: bool,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,
}

/// Load the config file, apply CLI overrides and validate the result.
///
/// A missing file yields the defaults; an unreadable, unparsable or invalid
/// one is an error.
fn load_config(cli: &Cli) -> Result<(PathBuf, AppConfig), ConfigError> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(user_registry::default_config_path);

    let mut config = AppConfig::load(&config_path)?;

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.no_seed {
        config.registry.seed = false;
    }

    config.validate()?;
    Ok((config_path, config))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (config_path, config) = load_config(&cli)?;

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.address());
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        println!("   Seed users  : {}", config.registry.seed);
        println!("   Swagger UI  : {}", config.api.docs_enabled);
        println!("   Metrics     : {}", config.api.metrics_enabled);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        registry: None,
    })
    .await?;
    handle.install_signal_handler();
    info!("🚀 Server started. Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_for(path: &std::path::Path, extra: &[&str]) -> Cli {
        let mut args = vec!["user-registry", "--config", path.to_str().unwrap()];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn missing_file_uses_defaults_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(&dir.path().join("absent.toml"), &["--port", "8081", "--no-seed"]);

        let (_, config) = load_config(&cli).unwrap();
        assert_eq!(config.server.port, 8081);
        assert!(!config.registry.seed);
    }

    #[test]
    fn unparsable_file_refuses_to_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = 1").unwrap();

        let err = load_config(&cli_for(&path, &[])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_log_format_refuses_to_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nformat = \"xml\"").unwrap();

        let err = load_config(&cli_for(&path, &[])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
