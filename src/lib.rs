//! Prefix registry build pipeline
//!
//! Discovers per-platform, per-year CSS prefix data contributed as small
//! JSON files, pivots and merges it into cumulative snapshots, and publishes
//! them with an `index.json` manifest beside the static browsing front end.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod registry;

pub use error::{RegistryError, Result};
