//! Typed inputs for facade operations.
//!
//! Create inputs name every required field; patch inputs make every
//! field optional and assign only what is present. All inputs use
//! `deny_unknown_fields`, so a payload carrying an unrecognized key
//! (including attempts to smuggle `password` through a profile patch)
//! fails at deserialization instead of being silently accepted.

use serde::{Deserialize, Serialize};

use hbnb_types::EntityId;

/// Input for [`HbnbFacade::create_user`](crate::HbnbFacade::create_user).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Hash computed by the caller; the core never sees a raw password.
    pub password_hash: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Profile fields a user may change. Deliberately has no password
/// field: password updates go through a dedicated credential flow.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Input for [`HbnbFacade::create_place`](crate::HbnbFacade::create_place).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPlace {
    pub owner_id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price_per_night: f64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub amenity_ids: Vec<EntityId>,
}

/// Listing fields a place owner may change. A present `amenity_ids`
/// replaces the attached set wholesale.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_per_night: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenity_ids: Option<Vec<EntityId>>,
}

/// Input for [`HbnbFacade::create_review`](crate::HbnbFacade::create_review).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewReview {
    pub user_id: EntityId,
    pub place_id: EntityId,
    pub rating: u8,
    pub comment: String,
}

/// Review fields the author may change.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewPatch {
    pub rating: Option<u8>,
    pub comment: Option<String>,
}

/// Amenity fields an admin may change.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AmenityPatch {
    pub name: Option<String>,
}
