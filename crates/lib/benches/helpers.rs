//! Shared helpers for benchmarks

use multikey::{Key, MultiKeyMap, Object, Symbol, key};

/// Primitive-only keys of the form `["key", i, i % 2 == 0]`.
pub fn primitive_keys(count: usize) -> Vec<Key> {
    (0..count)
        .map(|i| key!["key", i as u32, i % 2 == 0])
        .collect()
}

/// Keys mixing a shared symbol with a fresh object per key.
pub fn reference_keys(count: usize) -> Vec<Key> {
    let tag = Symbol::new("bench");
    (0..count)
        .map(|i| key![tag.clone(), Object::new(i), i as u32])
        .collect()
}

/// Creates a map holding every key in `keys`, valued by position.
pub fn populated_map(keys: &[Key]) -> MultiKeyMap<usize> {
    keys.iter().cloned().enumerate().map(|(i, k)| (k, i)).collect()
}
