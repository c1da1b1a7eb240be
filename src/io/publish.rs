//! Output directory publishing
//!
//! The output directory is owned by the build: every publish removes it,
//! recreates it and writes the full file map. Any failure aborts the run
//! and may leave the directory empty or partially written.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use super::paths::PathUtils;
use crate::{RegistryError, Result};

/// Flat map of output-relative path -> file bytes
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FileMap {
    entries: BTreeMap<String, Vec<u8>>,
    pretty: bool,
}

impl FileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize JSON entries with indentation
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Add a pass-through file
    pub fn insert_raw(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        let path = path.into();
        if self.entries.insert(path.clone(), contents.into()).is_some() {
            warn!("Output path {} was already present, replacing it", path);
        }
    }

    /// Add a file holding the serialized form of `value`
    pub fn insert_json<T: Serialize + ?Sized>(
        &mut self,
        path: impl Into<String>,
        value: &T,
    ) -> Result<()> {
        let contents = if self.pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        self.insert_raw(path, contents);
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Replace the contents of `target` with `files`.
///
/// Returns the number of files written.
pub fn publish(files: &FileMap, target: &Path) -> Result<usize> {
    // Reject unsafe paths before anything on disk is touched
    if let Some((path, _)) = files.iter().find(|(p, _)| !PathUtils::is_safe_path(Path::new(p))) {
        return Err(RegistryError::Config(format!(
            "Refusing to publish outside the output directory: {}",
            path
        )));
    }

    if target.exists() {
        debug!("Clearing output directory {}", target.display());
        fs::remove_dir_all(target).map_err(|e| RegistryError::io(target, e))?;
    }
    fs::create_dir_all(target).map_err(|e| RegistryError::io(target, e))?;

    let mut written = 0;
    for (relative, contents) in files.iter() {
        let path = target.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| RegistryError::io(parent, e))?;
        }
        fs::write(&path, contents).map_err(|e| RegistryError::io(&path, e))?;
        written += 1;
    }

    info!("Published {} files to {}", written, target.display());
    Ok(written)
}
