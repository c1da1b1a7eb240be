use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use prefix_registry::cli::{Cli, LogLevel};
use prefix_registry::config::ConfigLoader;
use prefix_registry::engine::Engine;

/// Initialize tracing, writing to stderr.
///
/// `RUST_LOG` overrides `--log-level` when it is set.
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let config = ConfigLoader::resolve(cli.config.as_deref(), cli.overrides())
        .context("Failed to resolve build configuration")?;

    Engine::new(config)
        .run()
        .context("Registry build failed")?;

    Ok(())
}
