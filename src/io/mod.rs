//! Output naming and publishing

pub mod paths;
pub mod publish;

pub use paths::{PathUtils, SnapshotPaths, INDEX_FILE, PLATFORM_DIR};
pub use publish::{publish, FileMap};
