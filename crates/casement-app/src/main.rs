#[allow(dead_code)]
mod app;
mod cli;
mod commands;

use std::process::ExitCode;

use casement_config::CasementConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "casement=info";

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Config comes first so its log level can seed the filter.
    let loaded = casement_config::load_config(args.config.as_deref());

    // Initialize logging
    let log_directive = args.log_level.clone().unwrap_or_else(|| match &loaded {
        Ok(config) => config.logging.level.directive().to_string(),
        Err(_) => DEFAULT_LOG_DIRECTIVE.to_string(),
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.parse().unwrap()),
            ),
        )
        .init();

    tracing::debug!("Casement v{} starting...", env!("CARGO_PKG_VERSION"));

    // Report config outcome
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        CasementConfig::default()
    });

    // Ensure platform directories exist
    if let Err(e) = casement_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    match commands::execute(args.command, &config, args.config.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
