//! Shared helpers for integration tests
//!
//! Builds throwaway registry and site trees under a `TempDir` and runs the
//! engine against them.

#![allow(dead_code)]

use anyhow::Result;
use prefix_registry::config::BuildConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// A project directory holding `registry/`, `site/` and `public/`
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        init_test_logging();
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn registry_dir(&self) -> PathBuf {
        self.root().join("registry")
    }

    pub fn site_dir(&self) -> PathBuf {
        self.root().join("site")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("public")
    }

    pub fn config(&self) -> BuildConfig {
        BuildConfig {
            registry_dir: self.registry_dir(),
            site_dir: self.site_dir(),
            output_dir: self.output_dir(),
            pretty: false,
        }
    }

    /// Write `registry/<relative>`
    pub fn registry_file(&self, relative: &str, contents: &str) -> Result<()> {
        write_file(&self.registry_dir().join(relative), contents)
    }

    /// Write `site/<relative>`
    pub fn site_file(&self, relative: &str, contents: &str) -> Result<()> {
        write_file(&self.site_dir().join(relative), contents)
    }

    /// Read `public/<relative>`
    pub fn output(&self, relative: &str) -> Result<String> {
        Ok(fs::read_to_string(self.output_dir().join(relative))?)
    }

    /// Read and parse `public/<relative>`
    pub fn output_json(&self, relative: &str) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.output(relative)?)?)
    }

    /// Every file under `public/`, as sorted relative paths
    pub fn output_files(&self) -> Result<Vec<String>> {
        let root = self.output_dir();
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(&root).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() {
                let relative = entry.path().strip_prefix(&root)?;
                files.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(files)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
