//! Manifest (`index.json`) describing where every snapshot lives
//!
//! ```text
//! {
//!   "webkit": {
//!     "from": { "2024": "platform/webkit--from-2024.json", ... },
//!     "last": { "1 year": "platform/webkit--last-0001.json", ... }
//!   }
//! }
//! ```
//!
//! `from` and `last` keep processing order, most recent year first.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::snapshot::Snapshot;

/// Snapshot locations of one platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformIndex {
    /// Calendar year -> snapshot path
    pub from: IndexMap<String, String>,
    /// `"<n> year"` -> snapshot path
    pub last: IndexMap<String, String>,
}

impl PlatformIndex {
    /// Record both file names of a snapshot
    pub fn record(&mut self, snapshot: &Snapshot) {
        self.from.insert(snapshot.year.clone(), snapshot.from_path());
        self.last.insert(snapshot.last_label(), snapshot.last_path());
    }
}

/// Platform -> snapshot locations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub platforms: BTreeMap<String, PlatformIndex>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, platform: impl Into<String>, index: PlatformIndex) {
        self.platforms.insert(platform.into(), index);
    }

    pub fn get(&self, platform: &str) -> Option<&PlatformIndex> {
        self.platforms.get(platform)
    }
}
