//! Per-platform pivoted view of registry data
//!
//! A platform's registry subtree is `year -> group file -> selector -> value`.
//! The view re-indexes it to `group -> selector -> year -> value` so the
//! history of a single selector can be read directly. For the `values`
//! group the value under each year is itself a `subKey -> value` mapping and
//! is carried through both pivots untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

use crate::registry::{pivot, pivot_at, Group, Tree};

static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("static year pattern"));

/// Whether a registry directory name is a four-digit year
pub fn is_year(name: &str) -> bool {
    YEAR_PATTERN.is_match(name)
}

/// Registry data of one platform, addressable by group, selector and year
#[derive(Debug, Clone, PartialEq)]
pub struct PivotedView {
    platform: String,
    /// Every year present in the registry, ascending
    years: Vec<String>,
    /// group -> selector -> year -> value
    groups: BTreeMap<Group, Tree>,
}

impl PivotedView {
    /// Build the view from a platform's `year -> group file -> payload` subtree
    pub fn from_years(platform: &str, years: Tree) -> Self {
        let years: Tree = years
            .into_iter()
            .filter(|(year, data)| {
                if !is_year(year) {
                    warn!(
                        platform = %platform,
                        "Skipping non-year registry directory '{}'", year
                    );
                    return false;
                }
                if !data.is_object() {
                    warn!(
                        platform = %platform,
                        "Skipping non-directory registry entry '{}'", year
                    );
                    return false;
                }
                true
            })
            .collect();
        let year_names: Vec<String> = years.keys().cloned().collect();

        // year -> file -> payload  =>  file -> year -> payload
        let mut groups = BTreeMap::new();
        for (file_name, per_year) in pivot(years) {
            let Some(group) = Group::from_file_name(&file_name) else {
                debug!(platform = %platform, "Dropping unknown group file '{}'", file_name);
                continue;
            };
            let Value::Object(per_year) = per_year else {
                continue;
            };
            // year -> selector -> value  =>  selector -> year -> value
            groups.insert(group, pivot(per_year));
        }

        trace!(
            platform = %platform,
            years = year_names.len(),
            groups = groups.len(),
            "Pivoted platform registry"
        );

        Self {
            platform: platform.to_string(),
            years: year_names,
            groups,
        }
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Years present for this platform, ascending
    pub fn years(&self) -> &[String] {
        &self.years
    }

    /// Groups with at least one selector
    pub fn groups(&self) -> impl Iterator<Item = Group> + '_ {
        self.groups.keys().copied()
    }

    /// Selectors recorded for a group
    pub fn selectors(&self, group: Group) -> Vec<&str> {
        self.groups
            .get(&group)
            .map(|selectors| selectors.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// `year -> value` record of one selector
    pub fn history(&self, group: Group, selector: &str) -> Option<&Tree> {
        self.groups
            .get(&group)
            .and_then(|selectors| selectors.get(selector))
            .and_then(Value::as_object)
    }

    /// Re-index back to `year -> group -> payload`, group keys renamed to
    /// their bare names. Every year of the view is present, possibly empty.
    pub fn into_year_major(self) -> BTreeMap<String, Tree> {
        let by_group: Tree = self
            .groups
            .into_iter()
            .map(|(group, selectors)| (group.as_str().to_string(), Value::Object(selectors)))
            .collect();

        // group -> selector -> year  =>  group -> year -> selector  =>  year -> group -> selector
        let by_year = pivot(pivot_at(by_group, 1));

        let mut year_major: BTreeMap<String, Tree> = self
            .years
            .into_iter()
            .map(|year| (year, Tree::new()))
            .collect();
        for (year, groups) in by_year {
            if let Value::Object(groups) = groups {
                year_major.insert(year, groups);
            }
        }
        year_major
    }
}
