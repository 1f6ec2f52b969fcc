use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::Result;
use crate::id::EntityId;
use crate::stamps::Stamps;
use crate::validate;

/// A bookable feature of a place (e.g. Wi-Fi, Parking).
///
/// The name is the amenity's unique field in the repository.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: EntityId,
    pub name: String,
    #[serde(flatten)]
    pub stamps: Stamps,
}

impl Amenity {
    /// Construct a validated amenity with a fresh identifier.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            id: EntityId::new(),
            name: validate::non_empty("name", name)?,
            stamps: Stamps::now(),
        })
    }

    /// Rename the amenity.
    pub fn rename(&mut self, name: &str) -> Result<()> {
        self.name = validate::non_empty("name", name)?;
        self.stamps.touch();
        Ok(())
    }
}

impl Entity for Amenity {
    const KIND: &'static str = "Amenity";

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

    #[test]
    fn new_trims_name() {
        let amenity = Amenity::new("  Wi-Fi  ").unwrap();
        assert_eq!(amenity.name, "Wi-Fi");
    }

    #[test]
    fn new_rejects_blank_name() {
        assert!(matches!(
            Amenity::new("  ").unwrap_err(),
            ModelError::EmptyField { field: "name" }
        ));
    }

    #[test]
    fn rename_validates() {
        let mut amenity = Amenity::new("WiFi").unwrap();
        amenity.rename("Wi-Fi").unwrap();
        assert_eq!(amenity.name, "Wi-Fi");

        let err = amenity.rename("").unwrap_err();
        assert!(matches!(err, ModelError::EmptyField { field: "name" }));
        assert_eq!(amenity.name, "Wi-Fi");
    }

    #[test]
    fn serde_roundtrip() {
        let amenity = Amenity::new("Parking").unwrap();
        let json = serde_json::to_value(&amenity).unwrap();
        let parsed: Amenity = serde_json::from_value(json).unwrap();
        assert_eq!(amenity, parsed);
    }
}
