use hbnb_types::{Entity, EntityId};

use crate::error::StoreResult;
use crate::record::StoredRecord;

/// Type-partitioned entity repository.
///
/// All implementations must satisfy these invariants:
/// - Entities live in independent per-kind buckets keyed by identifier.
/// - A registered unique field admits at most one entity per value
///   within its kind; the index and the bucket stay consistent.
/// - Rejected writes leave the store unchanged (all-or-nothing).
/// - `list` preserves insertion order.
/// - The store never validates fields; callers pass constructed,
///   validated entities.
pub trait Repository: Send + Sync {
    /// Declare `field` unique among all entities of `kind`.
    ///
    /// Idempotent. The constraint applies to subsequent writes only;
    /// entities added before registration are not retroactively checked.
    fn register_unique_field(&self, kind: &str, field: &str);

    /// Insert a record into its kind's bucket.
    ///
    /// Fails with [`StoreError::UniquenessViolation`] if any registered
    /// unique field of the kind already maps the record's value to a
    /// different identifier. Returns the stored record on success.
    ///
    /// [`StoreError::UniquenessViolation`]: crate::StoreError::UniquenessViolation
    fn add(&self, record: &StoredRecord) -> StoreResult<StoredRecord>;

    /// Fetch a record by kind and identifier.
    ///
    /// Returns `Ok(None)` if absent. Never fails with a uniqueness or
    /// not-found error.
    fn get(&self, kind: &str, id: &str) -> StoreResult<Option<StoredRecord>>;

    /// All records of a kind, in insertion order.
    fn list(&self, kind: &str) -> StoreResult<Vec<StoredRecord>>;

    /// Overwrite an existing record.
    ///
    /// Fails with [`StoreError::NotFound`] if the identifier was never
    /// added, and re-checks uniqueness excluding the record's own
    /// identifier. Stale index entries from the prior version are
    /// purged. Returns the stored record on success.
    ///
    /// [`StoreError::NotFound`]: crate::StoreError::NotFound
    fn update(&self, record: &StoredRecord) -> StoreResult<StoredRecord>;

    /// Remove a record and its unique-index entries.
    ///
    /// Returns `Ok(true)` if the record existed and was removed,
    /// `Ok(false)` if it did not exist (no state change).
    fn delete(&self, kind: &str, id: &str) -> StoreResult<bool>;

    /// Linear scan for the first record of `kind` whose `field`
    /// string-coerces to `value`, in insertion order.
    ///
    /// This is an unindexed convenience lookup; it works for any field,
    /// registered unique or not.
    fn find_by_field(&self, kind: &str, field: &str, value: &str)
        -> StoreResult<Option<StoredRecord>>;

    // ---- Typed wrappers ----

    /// Insert a typed entity and return the stored copy.
    fn add_entity<E: Entity>(&self, entity: &E) -> StoreResult<E>
    where
        Self: Sized,
    {
        let stored = self.add(&StoredRecord::from_entity(entity)?)?;
        stored.decode()
    }

    /// Fetch a typed entity by identifier.
    fn get_entity<E: Entity>(&self, id: &EntityId) -> StoreResult<Option<E>>
    where
        Self: Sized,
    {
        match self.get(E::KIND, &id.to_string())? {
            Some(record) => Ok(Some(record.decode()?)),
            None => Ok(None),
        }
    }

    /// All entities of a type, in insertion order.
    fn list_entities<E: Entity>(&self) -> StoreResult<Vec<E>>
    where
        Self: Sized,
    {
        self.list(E::KIND)?
            .iter()
            .map(StoredRecord::decode)
            .collect()
    }

    /// Overwrite a typed entity and return the stored copy.
    fn update_entity<E: Entity>(&self, entity: &E) -> StoreResult<E>
    where
        Self: Sized,
    {
        let stored = self.update(&StoredRecord::from_entity(entity)?)?;
        stored.decode()
    }

    /// Remove a typed entity by identifier.
    fn delete_entity<E: Entity>(&self, id: &EntityId) -> StoreResult<bool>
    where
        Self: Sized,
    {
        self.delete(E::KIND, &id.to_string())
    }

    /// First typed entity whose `field` string-coerces to `value`.
    fn find_entity_by_field<E: Entity>(&self, field: &str, value: &str) -> StoreResult<Option<E>>
    where
        Self: Sized,
    {
        match self.find_by_field(E::KIND, field, value)? {
            Some(record) => Ok(Some(record.decode()?)),
            None => Ok(None),
        }
    }
}
