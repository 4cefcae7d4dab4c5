// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ItemId;

/// The user's current choices from a picker, in the order they were made.
///
/// Ids are not checked against the source collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionSet {
    members: IndexSet<ItemId>,
}

// IndexSet equality ignores order; chip order is part of a selection's value.
impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.members.iter().eq(other.members.iter())
    }
}

impl Eq for SelectionSet {}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when `id` was already a member.
    pub fn add(&mut self, id: ItemId) -> bool {
        let inserted = self.members.insert(id);
        if inserted {
            debug!(size = self.members.len(), "selection grew");
        }
        inserted
    }

    /// Returns `false` when `id` was not a member.
    pub fn remove(&mut self, id: &str) -> bool {
        // shift_remove keeps the remaining chips in insertion order
        let removed = self.members.shift_remove(id);
        if removed {
            debug!(size = self.members.len(), "selection shrank");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.members.iter()
    }

    pub fn to_ordered_list(&self) -> Vec<ItemId> {
        self.members.iter().cloned().collect()
    }
}

impl FromIterator<ItemId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}
