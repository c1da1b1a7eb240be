//! Deep merge of nested mappings
//!
//! Mappings are unioned recursively. Scalars and arrays from the incoming
//! side replace whatever the target holds; arrays are never concatenated.

use serde_json::Value;

use super::Tree;

/// Merge `source` into `target` in place.
pub fn deep_merge<'a>(target: &'a mut Tree, source: &Tree) -> &'a mut Tree {
    for (key, incoming) in source {
        if let (Some(Value::Object(existing)), Value::Object(incoming_map)) =
            (target.get_mut(key), incoming)
        {
            deep_merge(existing, incoming_map);
            continue;
        }
        target.insert(key.clone(), incoming.clone());
    }
    target
}

/// Fold every source into `target`, left to right.
pub fn deep_merge_all<'a, 'b>(
    target: &'a mut Tree,
    sources: impl IntoIterator<Item = &'b Tree>,
) -> &'a mut Tree {
    for source in sources {
        deep_merge(target, source);
    }
    target
}

/// Owned form of [`deep_merge`]: `top` merged over `base`.
pub fn merged(mut base: Tree, top: &Tree) -> Tree {
    deep_merge(&mut base, top);
    base
}
