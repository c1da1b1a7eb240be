//! Registry data primitives
//!
//! The registry is a directory tree of small JSON documents laid out as
//! `<platform>/<year>/<group>.json`. This module loads that tree into nested
//! JSON mappings and provides the two reshaping operations the snapshot
//! engine is built from: the axis pivot and the deep merge.

pub mod group;
pub mod loader;
pub mod merge;
pub mod pivot;

pub use group::Group;
pub use loader::{load_assets, load_tree, AssetTree};
pub use merge::{deep_merge, deep_merge_all, merged};
pub use pivot::{pivot, pivot_at};

/// A nested JSON mapping. `serde_json::Value` is the tagged
/// scalar/list/mapping variant every operation here dispatches on.
pub type Tree = serde_json::Map<String, serde_json::Value>;
