use std::path::{Component, Path};

/// Directory (relative to the output root) holding snapshot files
pub const PLATFORM_DIR: &str = "platform";

/// Manifest file name at the output root
pub const INDEX_FILE: &str = "index.json";

/// Output naming for snapshot files
pub struct SnapshotPaths;

impl SnapshotPaths {
    /// `platform/<platform>--from-<year>.json`
    pub fn from_year(platform: &str, year: &str) -> String {
        format!("{}/{}--from-{}.json", PLATFORM_DIR, platform, year)
    }

    /// `platform/<platform>--last-<NNNN>.json`, ordinal zero-padded to four digits
    pub fn last_ordinal(platform: &str, ordinal: usize) -> String {
        format!("{}/{}--last-{:04}.json", PLATFORM_DIR, platform, ordinal)
    }

    /// Manifest label for the `last` family
    pub fn last_label(ordinal: usize) -> String {
        format!("{} year", ordinal)
    }
}

/// Utilities for working with paths
pub struct PathUtils;

impl PathUtils {
    /// Check that a relative output path stays beneath its root
    /// (no traversal, no absolute or prefixed components)
    pub fn is_safe_path(path: &Path) -> bool {
        !path.as_os_str().is_empty()
            && path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    }
}
