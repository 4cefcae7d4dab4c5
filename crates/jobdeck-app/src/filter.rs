// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::Searchable;

/// Folds a raw query for case-insensitive matching. An empty result means the
/// query does not filter anything.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Returns the items whose label, or secondary label, contains `query`.
///
/// Source order is kept and there is no ranking. A query that normalizes to
/// nothing returns the whole collection.
pub fn filter<T>(collection: &[T], query: &str) -> Vec<T>
where
    T: Searchable + Clone,
{
    let needle = normalize(query);
    if needle.is_empty() {
        return collection.to_vec();
    }

    collection
        .iter()
        .filter(|item| matches_normalized(*item, &needle))
        .cloned()
        .collect()
}

/// Matches one item against an already-normalized needle.
pub fn matches_normalized<T: Searchable + ?Sized>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if item.label().to_lowercase().contains(needle) {
        return true;
    }
    item.secondary_label()
        .is_some_and(|secondary| secondary.to_lowercase().contains(needle))
}
