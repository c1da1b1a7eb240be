//! Directory tree loading
//!
//! Materializes a directory hierarchy as nested JSON mappings: directories
//! become nested objects and `.json` files become keys (file name included)
//! holding their parsed content. Entries whose name starts with a dot are
//! never visited, which is how draft year folders and the contributor
//! scaffold are kept out of the build.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use super::Tree;
use crate::{RegistryError, Result};

/// Front-end asset tree
///
/// Top-level files are kept verbatim; each top-level subdirectory is loaded
/// as a JSON tree with [`load_tree`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AssetTree {
    /// Top-level files, keyed by file name
    pub files: BTreeMap<String, Vec<u8>>,
    /// Parsed JSON beneath top-level subdirectories, keyed by directory name
    pub data: Tree,
}

impl AssetTree {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.data.is_empty()
    }

    /// Flatten the JSON part into `dir/sub/file.json` paths
    pub fn json_entries(&self) -> Vec<(String, &Value)> {
        let mut entries = Vec::new();
        flatten_into(&self.data, "", &mut entries);
        entries
    }
}

fn flatten_into<'a>(tree: &'a Tree, prefix: &str, out: &mut Vec<(String, &'a Value)>) {
    for (key, value) in tree {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}/{}", prefix, key)
        };
        match value {
            Value::Object(children) if !is_json_name(key) => flatten_into(children, &path, out),
            _ => out.push((path, value)),
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Whether a file name carries the `.json` extension
pub fn is_json_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .map(|ext| ext == "json")
        .unwrap_or(false)
}

/// Read and parse one JSON file.
///
/// Unreadable files are fatal; malformed content is logged and yields `None`.
fn read_json(path: &Path) -> Result<Option<Value>> {
    let contents = fs::read(path).map_err(|e| RegistryError::io(path, e))?;
    match serde_json::from_slice(&contents) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!("Skipping malformed JSON file {}: {}", path.display(), e);
            Ok(None)
        }
    }
}

/// Place `value` at the nested position named by `keys`, creating
/// intermediate mappings as needed
fn insert_at(tree: &mut Tree, keys: &[String], value: Value) {
    let Some((last, parents)) = keys.split_last() else {
        return;
    };

    let mut current = tree;
    for key in parents {
        let slot = current
            .entry(key.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        match slot {
            Value::Object(children) => current = children,
            _ => {
                warn!("Cannot nest {} beneath non-directory entry {}", last, key);
                return;
            }
        }
    }
    current.insert(last.clone(), value);
}

/// Load a directory as a nested mapping of its `.json` descendants.
///
/// Non-JSON files are ignored and directories with no JSON-bearing
/// descendants never appear in the result.
pub fn load_tree(root: &Path) -> Result<Tree> {
    if !root.is_dir() {
        return Err(RegistryError::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    let mut tree = Tree::new();
    let mut loaded = 0usize;

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !is_json_name(&name) {
            debug!("Ignoring non-JSON file: {}", entry.path().display());
            continue;
        }

        let Some(value) = read_json(entry.path())? else {
            continue;
        };

        let relative = entry.path().strip_prefix(root).map_err(|_| {
            RegistryError::Config(format!(
                "{} is not beneath {}",
                entry.path().display(),
                root.display()
            ))
        })?;
        let keys: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        insert_at(&mut tree, &keys, value);
        loaded += 1;
    }

    debug!("Loaded {} JSON files from {}", loaded, root.display());
    Ok(tree)
}

/// Load the front-end asset tree.
///
/// Top-level files are captured byte-for-byte. Top-level subdirectories are
/// JSON-parsed with [`load_tree`]. A missing directory yields an empty tree.
pub fn load_assets(root: &Path) -> Result<AssetTree> {
    let mut assets = AssetTree::default();

    if !root.is_dir() {
        warn!(
            "Asset directory {} does not exist, publishing generated files only",
            root.display()
        );
        return Ok(assets);
    }

    let walker = WalkDir::new(root)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if entry.file_type().is_dir() {
            let subtree = load_tree(entry.path())?;
            if !subtree.is_empty() {
                assets.data.insert(name, Value::Object(subtree));
            }
        } else if entry.file_type().is_file() {
            let contents = fs::read(entry.path()).map_err(|e| RegistryError::io(entry.path(), e))?;
            assets.files.insert(name, contents);
        }
    }

    info!(
        "Loaded {} asset files and {} data directories from {}",
        assets.files.len(),
        assets.data.len(),
        root.display()
    );
    Ok(assets)
}
