use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Build cumulative CSS prefix snapshots from the registry and publish them
/// with the browsing front end
#[derive(Parser, Debug)]
#[command(name = "prefix-registry")]
#[command(version)]
#[command(
    about = "Builds cumulative per-platform CSS prefix snapshots",
    long_about = "Reads registry/<platform>/<year>/<group>.json, folds every platform's years into \
                  from-<year> and last-<n> snapshots, and replaces the output directory with the \
                  snapshots, index.json and the front-end assets. Run without flags to use the \
                  default directories."
)]
pub struct Cli {
    /// YAML build configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Registry root directory [default: registry]
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Front-end asset directory [default: site]
    #[arg(long)]
    pub site: Option<PathBuf>,

    /// Output directory, replaced on every build [default: public]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Pretty-print generated JSON
    #[arg(long)]
    pub pretty: bool,

    /// Log level (RUST_LOG takes precedence when set)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            registry_dir: self.registry.clone(),
            site_dir: self.site.clone(),
            output_dir: self.output.clone(),
            pretty: self.pretty,
        }
    }
}
