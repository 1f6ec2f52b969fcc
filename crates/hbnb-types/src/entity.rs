use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::id::EntityId;

/// A storable domain entity.
///
/// Ties a concrete type to its type tag ([`Entity::KIND`]) and stable
/// identifier. Repositories partition entities into per-kind buckets
/// keyed by [`Entity::id`], and round-trip them through their serde
/// representation, so implementors must serialize to a JSON object.
///
/// Entity construction and validation happen *before* storage: a value
/// of an implementing type is by construction valid, and repositories
/// never re-validate fields beyond uniqueness constraints.
pub trait Entity: Serialize + DeserializeOwned + fmt::Debug + Send + Sync + 'static {
    /// Type tag naming this entity kind (e.g. `"User"`).
    const KIND: &'static str;

    /// The entity's stable identifier.
    fn id(&self) -> &EntityId;

    /// Refresh the entity's `updated_at` timestamp.
    fn touch(&mut self);
}
