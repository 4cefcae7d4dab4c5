// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use indexmap::IndexMap;
use tracing::debug;

use crate::{CatalogError, Record, RecordId};

/// Ordered, keyed list of user-owned records such as saved jobs.
#[derive(Debug, Clone)]
pub struct RecordCollection<R> {
    records: IndexMap<RecordId, R>,
}

impl<R> Default for RecordCollection<R> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }
}

impl<R: Record + Clone> RecordCollection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from seed records, keeping their order.
    pub fn from_records<I>(records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = R>,
    {
        let mut collection = Self::new();
        for record in records {
            let id = record.record_id().clone();
            if collection.records.contains_key(&id) {
                return Err(CatalogError::DuplicateRecord { id });
            }
            collection.records.insert(id, record);
        }
        Ok(collection)
    }

    /// Appends `record` unless its id is already present.
    pub fn insert(&mut self, record: R) -> bool {
        let id = record.record_id().clone();
        if self.records.contains_key(&id) {
            return false;
        }
        debug!(%id, "record added");
        self.records.insert(id, record);
        true
    }

    /// Removes and returns the record; `None` when the id is unknown.
    pub fn remove_by_id(&mut self, id: &str) -> Option<R> {
        let removed = self.records.shift_remove(id);
        if removed.is_some() {
            debug!(id, remaining = self.records.len(), "record removed");
        }
        removed
    }

    /// Drops every record and reports how many were dropped.
    pub fn remove_all(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        debug!(count, "records cleared");
        count
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.records.keys().cloned().collect()
    }

    pub fn to_ordered_list(&self) -> Vec<R> {
        self.records.values().cloned().collect()
    }
}

impl<R: PartialEq> PartialEq for RecordCollection<R> {
    fn eq(&self, other: &Self) -> bool {
        self.records.iter().eq(other.records.iter())
    }
}

impl<R: Eq> Eq for RecordCollection<R> {}
