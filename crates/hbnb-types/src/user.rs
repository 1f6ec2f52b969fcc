use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::Result;
use crate::id::EntityId;
use crate::stamps::Stamps;
use crate::validate;

/// A registered account that can own places and write reviews.
///
/// The email is normalized (trimmed, lowercased) and is the user's
/// unique field in the repository. Password hashing happens outside the
/// core; the model only carries the resulting hash.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    /// Places owned by this user.
    #[serde(default)]
    pub place_ids: Vec<EntityId>,
    /// Reviews written by this user.
    #[serde(default)]
    pub review_ids: Vec<EntityId>,
    #[serde(flatten)]
    pub stamps: Stamps,
}

impl User {
    /// Construct a validated user with a fresh identifier.
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: &str,
        is_admin: bool,
    ) -> Result<Self> {
        Ok(Self {
            id: EntityId::new(),
            first_name: validate::non_empty("first_name", first_name)?,
            last_name: validate::non_empty("last_name", last_name)?,
            email: validate::email(email)?,
            password_hash: validate::non_empty("password_hash", password_hash)?,
            is_admin,
            place_ids: Vec::new(),
            review_ids: Vec::new(),
            stamps: Stamps::now(),
        })
    }

    /// Update profile fields. Only the provided fields are assigned, and
    /// every provided value is validated before any assignment, so a
    /// failed update leaves the user unchanged.
    pub fn update_profile(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<()> {
        let first_name = first_name
            .map(|v| validate::non_empty("first_name", v))
            .transpose()?;
        let last_name = last_name
            .map(|v| validate::non_empty("last_name", v))
            .transpose()?;
        let email = email.map(validate::email).transpose()?;

        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        self.stamps.touch();
        Ok(())
    }

    /// Record ownership of a place. Idempotent.
    pub fn link_place(&mut self, place_id: EntityId) {
        if !self.place_ids.contains(&place_id) {
            self.place_ids.push(place_id);
            self.stamps.touch();
        }
    }

    /// Forget ownership of a place.
    pub fn unlink_place(&mut self, place_id: &EntityId) {
        if let Some(pos) = self.place_ids.iter().position(|id| id == place_id) {
            self.place_ids.remove(pos);
            self.stamps.touch();
        }
    }

    /// Record authorship of a review. Idempotent.
    pub fn link_review(&mut self, review_id: EntityId) {
        if !self.review_ids.contains(&review_id) {
            self.review_ids.push(review_id);
            self.stamps.touch();
        }
    }

    /// Forget authorship of a review.
    pub fn unlink_review(&mut self, review_id: &EntityId) {
        if let Some(pos) = self.review_ids.iter().position(|id| id == review_id) {
            self.review_ids.remove(pos);
            self.stamps.touch();
        }
    }
}

impl Entity for User {
    const KIND: &'static str = "User";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn touch(&mut self) {
        self.stamps.touch();
    }
}
