use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Build configuration: where the registry and site assets are read from,
/// where the output goes, and how generated JSON is formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Registry root (`<platform>/<year>/<group>.json`)
    pub registry_dir: PathBuf,

    /// Front-end asset tree copied into the output
    pub site_dir: PathBuf,

    /// Output root, fully replaced on every build
    pub output_dir: PathBuf,

    /// Pretty-print generated JSON
    pub pretty: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            registry_dir: PathBuf::from("registry"),
            site_dir: PathBuf::from("site"),
            output_dir: PathBuf::from("public"),
            pretty: false,
        }
    }
}

/// Command-line overrides, applied on top of file configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub registry_dir: Option<PathBuf>,
    pub site_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub pretty: bool,
}
