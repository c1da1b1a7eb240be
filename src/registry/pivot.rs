//! Axis pivot: `{A: {B: V}}` becomes `{B: {A: V}}`
//!
//! Leaf values are moved, never changed. Every `(outer, inner)` pair of the
//! input is written exactly once, so with unique keys at both levels the
//! pivot cannot collide and pivoting twice restores the input (as long as
//! no outer entry is an empty mapping, which has nothing to transpose).

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

use super::Tree;

/// Transpose the top two levels of a nested mapping.
///
/// Outer values that are not mappings are skipped with a warning.
pub fn pivot(outer: Tree) -> Tree {
    let mut pivoted: BTreeMap<String, Tree> = BTreeMap::new();

    for (outer_key, inner) in outer {
        let Value::Object(inner) = inner else {
            warn!("Cannot pivot non-mapping value at '{}', skipping", outer_key);
            continue;
        };
        for (inner_key, value) in inner {
            pivoted
                .entry(inner_key)
                .or_default()
                .insert(outer_key.clone(), value);
        }
    }

    pivoted
        .into_iter()
        .map(|(key, children)| (key, Value::Object(children)))
        .collect()
}

/// Apply [`pivot`] to every mapping found `depth` levels below the root.
///
/// `pivot_at(tree, 0)` is `pivot(tree)`. Non-mapping values met on the way
/// down are skipped with a warning.
pub fn pivot_at(tree: Tree, depth: usize) -> Tree {
    if depth == 0 {
        return pivot(tree);
    }

    tree.into_iter()
        .filter_map(|(key, value)| match value {
            Value::Object(children) => Some((key, Value::Object(pivot_at(children, depth - 1)))),
            _ => {
                warn!("Cannot descend into non-mapping value at '{}', skipping", key);
                None
            }
        })
        .collect()
}
