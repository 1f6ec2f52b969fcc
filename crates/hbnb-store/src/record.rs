use serde::{Deserialize, Serialize};
use serde_json::Value;

use hbnb_types::Entity;

use crate::error::{StoreError, StoreResult};

/// Type-erased stored form of a domain entity.
///
/// A record carries the entity's type tag, its identifier, and its
/// fields as a JSON object. Typed entities round-trip through
/// [`StoredRecord::from_entity`] and [`StoredRecord::decode`], while
/// the store itself only ever inspects individual fields through
/// [`StoredRecord::field`] (for uniqueness checks and attribute
/// lookups).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Type tag naming the bucket this record belongs to.
    pub kind: String,
    /// The owning entity's identifier.
    pub id: String,
    /// The entity's fields as a JSON object.
    pub body: Value,
}

impl StoredRecord {
    /// Encode a typed entity into its stored form.
    pub fn from_entity<E: Entity>(entity: &E) -> StoreResult<Self> {
        let body = serde_json::to_value(entity)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        if !body.is_object() {
            return Err(StoreError::Serialization(format!(
                "{} must serialize to a JSON object",
                E::KIND
            )));
        }
        Ok(Self {
            kind: E::KIND.to_string(),
            id: entity.id().to_string(),
            body,
        })
    }

    /// Decode the record back into a typed entity.
    pub fn decode<E: Entity>(&self) -> StoreResult<E> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// The string-coerced value of a top-level field.
    ///
    /// Scalar values (strings, numbers, booleans) coerce to their
    /// string form; null, absent, and structured values yield `None`.
    /// Uniqueness indexes and attribute lookups key on this coercion.
    pub fn field(&self, name: &str) -> Option<String> {
        match self.body.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}
