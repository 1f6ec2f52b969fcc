use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::record::StoredRecord;
use crate::traits::Repository;

/// Per-kind bucket: identifier → record, plus insertion order.
#[derive(Debug, Default)]
struct Bucket {
    entries: HashMap<String, StoredRecord>,
    order: Vec<String>,
}

impl Bucket {
    /// Insert or overwrite. A replaced record keeps its original
    /// position in the insertion order.
    fn insert(&mut self, record: StoredRecord) {
        if self.entries.insert(record.id.clone(), record.clone()).is_none() {
            self.order.push(record.id);
        }
    }

    fn remove(&mut self, id: &str) -> Option<StoredRecord> {
        let removed = self.entries.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }

    fn in_order(&self) -> Vec<StoredRecord> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).cloned())
            .collect()
    }
}

/// Unique-field indexes for one kind: field → (value → owning id).
type KindIndexes = HashMap<String, HashMap<String, String>>;

#[derive(Debug, Default)]
struct Inner {
    buckets: HashMap<String, Bucket>,
    unique: HashMap<String, KindIndexes>,
}

impl Inner {
    /// Reject the record if any registered unique field of its kind
    /// already maps the record's value to an identifier other than
    /// `record.id`. Read-only: a rejection leaves everything untouched.
    fn check_unique(&self, record: &StoredRecord) -> StoreResult<()> {
        let Some(indexes) = self.unique.get(&record.kind) else {
            return Ok(());
        };
        for (field, index) in indexes {
            let Some(value) = record.field(field) else {
                continue;
            };
            if let Some(owner) = index.get(&value) {
                if owner != &record.id {
                    return Err(StoreError::UniquenessViolation {
                        kind: record.kind.clone(),
                        field: field.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Drop the index entries owned by `record` (used before overwrite
    /// and on delete, so renamed values do not leave stale entries).
    fn unindex(&mut self, record: &StoredRecord) {
        let Some(indexes) = self.unique.get_mut(&record.kind) else {
            return;
        };
        for (field, index) in indexes.iter_mut() {
            if let Some(value) = record.field(field) {
                if index.get(&value) == Some(&record.id) {
                    index.remove(&value);
                }
            }
        }
    }

    /// Write the record's values into every registered unique index of
    /// its kind. Callers check uniqueness first.
    fn index(&mut self, record: &StoredRecord) {
        let Some(indexes) = self.unique.get_mut(&record.kind) else {
            return;
        };
        for (field, index) in indexes.iter_mut() {
            if let Some(value) = record.field(field) {
                index.insert(value, record.id.clone());
            }
        }
    }
}

/// In-memory, `HashMap`-based entity repository.
///
/// Buckets and unique-field indexes live together behind a single
/// `RwLock`, so a bucket mutation and its paired index mutation are
/// always applied atomically with respect to other callers. Records
/// are cloned on read/write. Data is lost when the store is dropped.
pub struct InMemoryRepository {
    inner: RwLock<Inner>,
}

impl InMemoryRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Number of records currently stored under `kind`.
    pub fn len(&self, kind: &str) -> usize {
        let inner = self.inner.read().expect("lock poisoned");
        inner.buckets.get(kind).map_or(0, |b| b.entries.len())
    }

    /// Returns `true` if no bucket holds any record.
    pub fn is_empty(&self) -> bool {
        let inner = self.inner.read().expect("lock poisoned");
        inner.buckets.values().all(|b| b.entries.is_empty())
    }

    /// Remove all records and all index entries. Registered unique
    /// fields stay registered.
    pub fn clear(&self) {
        let mut inner = self.inner.write().expect("lock poisoned");
        inner.buckets.clear();
        for indexes in inner.unique.values_mut() {
            for index in indexes.values_mut() {
                index.clear();
            }
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for InMemoryRepository {
    fn register_unique_field(&self, kind: &str, field: &str) {
        let mut inner = self.inner.write().expect("lock poisoned");
        inner
            .unique
            .entry(kind.to_string())
            .or_default()
            .entry(field.to_string())
            .or_default();
    }

    fn add(&self, record: &StoredRecord) -> StoreResult<StoredRecord> {
        let mut inner = self.inner.write().expect("lock poisoned");
        inner.check_unique(record)?;

        // Re-adding an existing id overwrites; purge the old version's
        // index entries so a changed unique value leaves no stale entry.
        if let Some(previous) = inner
            .buckets
            .get(&record.kind)
            .and_then(|b| b.entries.get(&record.id))
            .cloned()
        {
            inner.unindex(&previous);
        }

        inner.index(record);
        inner
            .buckets
            .entry(record.kind.clone())
            .or_default()
            .insert(record.clone());
        Ok(record.clone())
    }

    fn get(&self, kind: &str, id: &str) -> StoreResult<Option<StoredRecord>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner
            .buckets
            .get(kind)
            .and_then(|b| b.entries.get(id))
            .cloned())
    }

    fn list(&self, kind: &str) -> StoreResult<Vec<StoredRecord>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner.buckets.get(kind).map(Bucket::in_order).unwrap_or_default())
    }

    fn update(&self, record: &StoredRecord) -> StoreResult<StoredRecord> {
        let mut inner = self.inner.write().expect("lock poisoned");

        let previous = inner
            .buckets
            .get(&record.kind)
            .and_then(|b| b.entries.get(&record.id))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                kind: record.kind.clone(),
                id: record.id.clone(),
            })?;

        inner.check_unique(record)?;

        inner.unindex(&previous);
        inner.index(record);
        inner
            .buckets
            .entry(record.kind.clone())
            .or_default()
            .insert(record.clone());
        Ok(record.clone())
    }

    fn delete(&self, kind: &str, id: &str) -> StoreResult<bool> {
        let mut inner = self.inner.write().expect("lock poisoned");
        let Some(removed) = inner.buckets.get_mut(kind).and_then(|b| b.remove(id)) else {
            return Ok(false);
        };
        inner.unindex(&removed);
        Ok(true)
    }

    fn find_by_field(
        &self,
        kind: &str,
        field: &str,
        value: &str,
    ) -> StoreResult<Option<StoredRecord>> {
        let inner = self.inner.read().expect("lock poisoned");
        let Some(bucket) = inner.buckets.get(kind) else {
            return Ok(None);
        };
        for id in &bucket.order {
            if let Some(record) = bucket.entries.get(id) {
                if record.field(field).as_deref() == Some(value) {
                    return Ok(Some(record.clone()));
                }
            }
        }
        Ok(None)
    }
}

impl std::fmt::Debug for InMemoryRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read().expect("lock poisoned");
        let counts: HashMap<&str, usize> = inner
            .buckets
            .iter()
            .map(|(kind, bucket)| (kind.as_str(), bucket.entries.len()))
            .collect();
        f.debug_struct("InMemoryRepository")
            .field("buckets", &counts)
            .finish()
    }
}
