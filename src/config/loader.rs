use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::types::{BuildConfig, ConfigOverrides};
use crate::{RegistryError, Result};

/// Resolves the build configuration: defaults, then an optional YAML file,
/// then command-line overrides
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a YAML configuration file.
    ///
    /// Relative directories are resolved against the file's own directory.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<BuildConfig> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;

        let mut config = Self::from_yaml(&contents)?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            for dir in [
                &mut config.registry_dir,
                &mut config.site_dir,
                &mut config.output_dir,
            ] {
                if dir.is_relative() {
                    *dir = base.join(&*dir);
                }
            }
        }

        debug!("Loaded build configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from YAML text, filling unset fields with defaults
    pub fn from_yaml(contents: &str) -> Result<BuildConfig> {
        if contents.trim().is_empty() {
            return Ok(BuildConfig::default());
        }
        let config: BuildConfig = serde_yaml_ng::from_str(contents)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Resolve the final configuration
    pub fn resolve(file: Option<&Path>, overrides: ConfigOverrides) -> Result<BuildConfig> {
        let mut config = match file {
            Some(path) => Self::load_file(path)?,
            None => BuildConfig::default(),
        };

        if let Some(dir) = overrides.registry_dir {
            config.registry_dir = dir;
        }
        if let Some(dir) = overrides.site_dir {
            config.site_dir = dir;
        }
        if let Some(dir) = overrides.output_dir {
            config.output_dir = dir;
        }
        if overrides.pretty {
            config.pretty = true;
        }

        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &BuildConfig) -> Result<()> {
        for (name, dir) in [
            ("registry_dir", &config.registry_dir),
            ("site_dir", &config.site_dir),
            ("output_dir", &config.output_dir),
        ] {
            if dir.as_os_str().is_empty() {
                return Err(RegistryError::Config(format!("{} must not be empty", name)));
            }
        }

        // The output directory is deleted on every build, so it must not
        // overlap either input in any direction
        let output = normalize(&config.output_dir)?;
        for (name, dir) in [
            ("registry_dir", &config.registry_dir),
            ("site_dir", &config.site_dir),
        ] {
            let input = normalize(dir)?;
            if output.starts_with(&input) || input.starts_with(&output) {
                return Err(RegistryError::Config(format!(
                    "output_dir {} overlaps {} {}",
                    config.output_dir.display(),
                    name,
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}

/// Absolute, lexically cleaned form of `path`, with symlinks resolved on the
/// longest prefix that exists
fn normalize(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| RegistryError::io(".", e))?
            .join(path)
    };

    let mut clean = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                clean.pop();
            }
            other => clean.push(other.as_os_str()),
        }
    }

    let mut existing = clean.clone();
    let mut missing = Vec::new();
    while !existing.exists() {
        match existing.file_name() {
            Some(name) => {
                missing.push(name.to_os_string());
                existing.pop();
            }
            None => return Ok(clean),
        }
    }

    let mut resolved = existing
        .canonicalize()
        .map_err(|e| RegistryError::io(&existing, e))?;
    resolved.extend(missing.iter().rev());
    Ok(resolved)
}
