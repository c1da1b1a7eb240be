//! Snapshot engine - orchestrates a full build
//!
//! A build is one blocking sequence:
//! 1. Load the registry tree (`platform -> year -> group file -> payload`)
//! 2. Pivot each platform into a [`PivotedView`]
//! 3. Fold years into cumulative snapshots and the manifest
//! 4. Load the front-end asset tree
//! 5. Publish snapshots, `index.json` and assets to the output directory
//!
//! Every run is a full rebuild; nothing from a previous run is reused.

use serde_json::Value;
use tracing::{debug, info, warn};

pub mod manifest;
pub mod snapshot;
pub mod view;

pub use manifest::{Manifest, PlatformIndex};
pub use snapshot::{build_platform, PlatformSnapshots, Snapshot};
pub use view::PivotedView;

use crate::config::BuildConfig;
use crate::io::paths::INDEX_FILE;
use crate::io::publish::{publish, FileMap};
use crate::registry::loader::is_json_name;
use crate::registry::{load_assets, load_tree, AssetTree, Tree};
use crate::Result;

/// Everything computed from the registry, before any output is written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryBuild {
    pub manifest: Manifest,
    pub platforms: Vec<PlatformSnapshots>,
}

impl RegistryBuild {
    pub fn snapshot_count(&self) -> usize {
        self.platforms.iter().map(|p| p.snapshots.len()).sum()
    }
}

/// Summary of a completed build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub platforms: usize,
    pub snapshots: usize,
    pub assets: usize,
    pub files_written: usize,
}

/// Turn a loaded registry tree into snapshots and a manifest
pub fn build_registry(registry: Tree) -> RegistryBuild {
    let mut build = RegistryBuild::default();

    for (platform, years) in registry {
        if is_json_name(&platform) {
            warn!("Skipping JSON file at platform level: {}", platform);
            continue;
        }
        let Value::Object(years) = years else {
            warn!("Skipping registry file at platform level: {}", platform);
            continue;
        };

        let view = PivotedView::from_years(&platform, years);
        if view.years().is_empty() {
            warn!(platform = %platform, "Platform has no year directories, skipping");
            continue;
        }

        let built = build_platform(view);
        build.manifest.insert(platform, built.index.clone());
        build.platforms.push(built);
    }

    build
}

/// Lay out the output: assets first, then snapshots and the manifest, which
/// replace any asset at the same path
pub fn render_files(build: &RegistryBuild, assets: &AssetTree, pretty: bool) -> Result<FileMap> {
    let mut files = FileMap::new().with_pretty_json(pretty);

    for (name, contents) in &assets.files {
        files.insert_raw(name.clone(), contents.clone());
    }
    for (path, value) in assets.json_entries() {
        files.insert_json(path, value)?;
    }

    for platform in &build.platforms {
        for snapshot in &platform.snapshots {
            files.insert_json(snapshot.from_path(), &snapshot.content)?;
            files.insert_json(snapshot.last_path(), &snapshot.content)?;
        }
    }
    files.insert_json(INDEX_FILE, &build.manifest)?;

    Ok(files)
}

/// A full registry build bound to one configuration
pub struct Engine {
    config: BuildConfig,
}

impl Engine {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Compute the complete output file map without writing anything
    pub fn compute(&self) -> Result<(FileMap, BuildReport)> {
        info!("Loading registry from {}", self.config.registry_dir.display());
        let registry = load_tree(&self.config.registry_dir)?;

        let build = build_registry(registry);
        debug!(
            platforms = build.platforms.len(),
            snapshots = build.snapshot_count(),
            "Registry folded into snapshots"
        );

        let assets = load_assets(&self.config.site_dir)?;
        let asset_count = assets.files.len() + assets.json_entries().len();

        let files = render_files(&build, &assets, self.config.pretty)?;

        let report = BuildReport {
            platforms: build.platforms.len(),
            snapshots: build.snapshot_count(),
            assets: asset_count,
            files_written: 0,
        };
        Ok((files, report))
    }

    /// Build and publish to the output directory
    pub fn run(&self) -> Result<BuildReport> {
        let (files, mut report) = self.compute()?;
        report.files_written = publish(&files, &self.config.output_dir)?;

        info!(
            platforms = report.platforms,
            snapshots = report.snapshots,
            assets = report.assets,
            "Build complete: {} files written to {}",
            report.files_written,
            self.config.output_dir.display()
        );
        Ok(report)
    }
}
