use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::Result;
use crate::id::EntityId;
use crate::stamps::Stamps;
use crate::validate;

/// A rental listing owned by a user.
///
/// Relationships are stored as identifiers: the owning user, the set of
/// attached amenities, and the reviews written about this place. The
/// amenity set is a `BTreeSet` so its serialized order is deterministic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: EntityId,
    pub owner_id: EntityId,
    pub title: String,
    /// Free-form description; may be empty.
    pub description: String,
    pub price_per_night: f64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub amenity_ids: BTreeSet<EntityId>,
    #[serde(default)]
    pub review_ids: Vec<EntityId>,
    #[serde(flatten)]
    pub stamps: Stamps,
}

impl Place {
    /// Construct a validated place with a fresh identifier.
    pub fn new(
        owner_id: EntityId,
        title: &str,
        description: &str,
        price_per_night: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        Ok(Self {
            id: EntityId::new(),
            owner_id,
            title: validate::non_empty("title", title)?,
            description: validate::optional_text(description),
            price_per_night: validate::price(price_per_night)?,
            latitude: validate::latitude(latitude)?,
            longitude: validate::longitude(longitude)?,
            amenity_ids: BTreeSet::new(),
            review_ids: Vec::new(),
            stamps: Stamps::now(),
        })
    }

    /// Update listing details. Only the provided fields are assigned, and
    /// every provided value is validated before any assignment.
    pub fn update_details(
        &mut self,
        title: Option<&str>,
        description: Option<&str>,
        price_per_night: Option<f64>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<()> {
        let title = title.map(|v| validate::non_empty("title", v)).transpose()?;
        let price_per_night = price_per_night.map(validate::price).transpose()?;
        let latitude = latitude.map(validate::latitude).transpose()?;
        let longitude = longitude.map(validate::longitude).transpose()?;

        if let Some(v) = title {
            self.title = v;
        }
        if let Some(v) = description {
            self.description = validate::optional_text(v);
        }
        if let Some(v) = price_per_night {
            self.price_per_night = v;
        }
        if let Some(v) = latitude {
            self.latitude = v;
        }
        if let Some(v) = longitude {
            self.longitude = v;
        }
        self.stamps.touch();
        Ok(())
    }

    /// Attach an amenity. Idempotent.
    pub fn add_amenity(&mut self, amenity_id: EntityId) {
        if self.amenity_ids.insert(amenity_id) {
            self.stamps.touch();
        }
    }

    /// Detach an amenity. Returns `true` if it was attached.
    pub fn remove_amenity(&mut self, amenity_id: &EntityId) -> bool {
        let removed = self.amenity_ids.remove(amenity_id);
        if removed {
            self.stamps.touch();
        }
        removed
    }

    /// Replace the attached amenity set.
    pub fn set_amenities(&mut self, amenity_ids: impl IntoIterator<Item = EntityId>) {
        self.amenity_ids = amenity_ids.into_iter().collect();
        self.stamps.touch();
    }

    /// Record a review written about this place. Idempotent.
    pub fn link_review(&mut self, review_id: EntityId) {
        if !self.review_ids.contains(&review_id) {
            self.review_ids.push(review_id);
            self.stamps.touch();
        }
    }

    /// Forget a review written about this place.
    pub fn unlink_review(&mut self, review_id: &EntityId) {
        if let Some(pos) = self.review_ids.iter().position(|id| id == review_id) {
            self.review_ids.remove(pos);
            self.stamps.touch();
        }
    }
}

impl Entity for Place {
    const KIND: &'static str = "Place";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn touch(&mut self) {
        self.stamps.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    fn loft(owner: EntityId) -> Place {
        Place::new(owner, "Downtown Loft", "Sunny loft", 120.0, 48.85, 2.35).unwrap()
    }

    #[test]
    fn new_validates_and_normalizes() {
        let owner = EntityId::new();
        let place = Place::new(owner, "  Loft  ", "  ", 0.0, -90.0, 180.0).unwrap();
        assert_eq!(place.title, "Loft");
        assert_eq!(place.description, "");
        assert_eq!(place.owner_id, owner);
    }

    #[test]
    fn new_rejects_out_of_range_values() {
        let owner = EntityId::new();
        assert!(matches!(
            Place::new(owner, "Loft", "", -1.0, 0.0, 0.0).unwrap_err(),
            ModelError::InvalidPrice(_)
        ));
        assert!(matches!(
            Place::new(owner, "Loft", "", 10.0, 91.0, 0.0).unwrap_err(),
            ModelError::LatitudeOutOfRange(_)
        ));
        assert!(matches!(
            Place::new(owner, "Loft", "", 10.0, 0.0, -181.0).unwrap_err(),
            ModelError::LongitudeOutOfRange(_)
        ));
    }

    #[test]
    fn update_details_partial() {
        let mut place = loft(EntityId::new());
        place
            .update_details(None, None, Some(150.0), None, None)
            .unwrap();
        assert_eq!(place.price_per_night, 150.0);
        assert_eq!(place.title, "Downtown Loft");
    }

    #[test]
    fn failed_update_leaves_place_unchanged() {
        let mut place = loft(EntityId::new());
        let before = place.clone();
        let err = place
            .update_details(Some("New Title"), None, Some(-5.0), None, None)
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidPrice(_)));
        assert_eq!(place, before);
    }

    #[test]
    fn amenity_set_semantics() {
        let mut place = loft(EntityId::new());
        let wifi = EntityId::new();
        place.add_amenity(wifi);
        place.add_amenity(wifi);
        assert_eq!(place.amenity_ids.len(), 1);

        assert!(place.remove_amenity(&wifi));
        assert!(!place.remove_amenity(&wifi));
    }

    #[test]
    fn set_amenities_replaces() {
        let mut place = loft(EntityId::new());
        place.add_amenity(EntityId::new());
        let a = EntityId::new();
        let b = EntityId::new();
        place.set_amenities([a, b]);
        assert_eq!(place.amenity_ids.len(), 2);
        assert!(place.amenity_ids.contains(&a));
        assert!(place.amenity_ids.contains(&b));
    }

    #[test]
    fn review_links() {
        let mut place = loft(EntityId::new());
        let review = EntityId::new();
        place.link_review(review);
        place.link_review(review);
        assert_eq!(place.review_ids, vec![review]);
        place.unlink_review(&review);
        assert!(place.review_ids.is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let mut place = loft(EntityId::new());
        place.add_amenity(EntityId::new());
        place.link_review(EntityId::new());
        let json = serde_json::to_value(&place).unwrap();
        let parsed: Place = serde_json::from_value(json).unwrap();
        assert_eq!(place, parsed);
    }
}
