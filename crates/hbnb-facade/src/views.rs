//! Response shapes returned by the facade.
//!
//! Views are what a transport layer serializes for clients: they embed
//! related entities by value (a place carries its owner, amenities, and
//! reviews) and omit private fields such as the password hash.

use serde::{Deserialize, Serialize};

use hbnb_types::{Amenity, EntityId, Place, Review, User};

/// Public projection of a place's owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OwnerView {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for OwnerView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Public projection of an amenity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AmenityView {
    pub id: EntityId,
    pub name: String,
}

impl From<&Amenity> for AmenityView {
    fn from(amenity: &Amenity) -> Self {
        Self {
            id: amenity.id,
            name: amenity.name.clone(),
        }
    }
}

/// Public projection of a review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewView {
    pub id: EntityId,
    pub user_id: EntityId,
    pub place_id: EntityId,
    pub rating: u8,
    pub comment: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            place_id: review.place_id,
            rating: review.rating,
            comment: review.comment.clone(),
        }
    }
}

/// A place with its relationships embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceView {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub price_per_night: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner: OwnerView,
    pub amenities: Vec<AmenityView>,
    pub reviews: Vec<ReviewView>,
}

impl PlaceView {
    /// Assemble a view from a place and its resolved relationships.
    pub fn assemble(place: &Place, owner: &User, amenities: &[Amenity], reviews: &[Review]) -> Self {
        Self {
            id: place.id,
            title: place.title.clone(),
            description: place.description.clone(),
            price_per_night: place.price_per_night,
            latitude: place.latitude,
            longitude: place.longitude,
            owner: OwnerView::from(owner),
            amenities: amenities.iter().map(AmenityView::from).collect(),
            reviews: reviews.iter().map(ReviewView::from).collect(),
        }
    }
}
