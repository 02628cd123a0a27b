//! Collection types used across Ferrodrop.
//!
//! This module provides:
//! - Re-exports of hash collections using AHash
//! - An insertion-ordered map with the same hasher

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

/// Insertion-ordered map hashed with AHash.
///
/// Used where iteration order must be deterministic (registries, snapshots).
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;

/// Create an empty [`IndexMap`].
pub fn index_map<K, V>() -> IndexMap<K, V> {
    IndexMap::with_hasher(RandomState::new())
}
