//! Cumulative snapshot construction
//!
//! Years are folded most recent first. Each step merges the running state
//! over that year's data, so every snapshot covers its anchor year and every
//! later year, and on a scalar conflict the most recent year wins:
//!
//! ```text
//! acc_0 = {}
//! acc_k = deep_merge(year_k, acc_{k-1})
//! ```
//!
//! Step `k` is published twice, as `from-<year_k>` and `last-<k>`.

use tracing::debug;

use super::manifest::PlatformIndex;
use super::view::PivotedView;
use crate::io::paths::SnapshotPaths;
use crate::registry::{merged, Tree};

/// All data known for a platform from `year` to the most recent year
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub platform: String,
    /// Calendar year the snapshot is anchored at
    pub year: String,
    /// Recency position, 1 for the most recent year
    pub ordinal: usize,
    /// group -> selector -> value
    pub content: Tree,
}

impl Snapshot {
    pub fn from_path(&self) -> String {
        SnapshotPaths::from_year(&self.platform, &self.year)
    }

    pub fn last_path(&self) -> String {
        SnapshotPaths::last_ordinal(&self.platform, self.ordinal)
    }

    pub fn last_label(&self) -> String {
        SnapshotPaths::last_label(self.ordinal)
    }
}

/// Snapshots of one platform together with its manifest entry
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformSnapshots {
    pub platform: String,
    /// Most recent first
    pub snapshots: Vec<Snapshot>,
    pub index: PlatformIndex,
}

/// Fold a platform's years into cumulative snapshots and its manifest entry
pub fn build_platform(view: PivotedView) -> PlatformSnapshots {
    let platform = view.platform().to_string();
    let year_major = view.into_year_major();

    let mut index = PlatformIndex::default();
    let snapshots: Vec<Snapshot> = year_major
        .into_iter()
        .rev()
        .enumerate()
        .scan(Tree::new(), |accumulated, (position, (year, data))| {
            *accumulated = merged(data, accumulated);
            Some(Snapshot {
                platform: platform.clone(),
                year,
                ordinal: position + 1,
                content: accumulated.clone(),
            })
        })
        .inspect(|snapshot| index.record(snapshot))
        .collect();

    debug!(
        platform = %platform,
        snapshots = snapshots.len(),
        "Built cumulative snapshots"
    );

    PlatformSnapshots {
        platform,
        snapshots,
        index,
    }
}
