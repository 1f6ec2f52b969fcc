use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::Result;
use crate::id::EntityId;
use crate::stamps::Stamps;
use crate::validate;

/// A rating and comment written by a user about a place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: EntityId,
    /// The author.
    pub user_id: EntityId,
    /// The place being reviewed.
    pub place_id: EntityId,
    /// 1 through 5.
    pub rating: u8,
    pub comment: String,
    #[serde(flatten)]
    pub stamps: Stamps,
}

impl Review {
    /// Construct a validated review with a fresh identifier.
    pub fn new(user_id: EntityId, place_id: EntityId, rating: u8, comment: &str) -> Result<Self> {
        Ok(Self {
            id: EntityId::new(),
            user_id,
            place_id,
            rating: validate::rating(rating)?,
            comment: validate::non_empty("comment", comment)?,
            stamps: Stamps::now(),
        })
    }

    /// Update rating and/or comment. Every provided value is validated
    /// before any assignment.
    pub fn update_review(&mut self, rating: Option<u8>, comment: Option<&str>) -> Result<()> {
        let rating = rating.map(validate::rating).transpose()?;
        let comment = comment
            .map(|v| validate::non_empty("comment", v))
            .transpose()?;

        if let Some(v) = rating {
            self.rating = v;
        }
        if let Some(v) = comment {
            self.comment = v;
        }
        self.stamps.touch();
        Ok(())
    }
}

impl Entity for Review {
    const KIND: &'static str = "Review";

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

    fn review() -> Review {
        Review::new(EntityId::new(), EntityId::new(), 4, "Great stay").unwrap()
    }

    #[test]
    fn new_validates_rating() {
        let err = Review::new(EntityId::new(), EntityId::new(), 0, "text").unwrap_err();
        assert!(matches!(err, ModelError::RatingOutOfRange(0)));
        let err = Review::new(EntityId::new(), EntityId::new(), 6, "text").unwrap_err();
        assert!(matches!(err, ModelError::RatingOutOfRange(6)));
    }

    #[test]
    fn new_requires_comment() {
        let err = Review::new(EntityId::new(), EntityId::new(), 3, "  ").unwrap_err();
        assert!(matches!(err, ModelError::EmptyField { field: "comment" }));
    }

    #[test]
    fn update_review_partial() {
        let mut r = review();
        r.update_review(Some(5), None).unwrap();
        assert_eq!(r.rating, 5);
        assert_eq!(r.comment, "Great stay");
    }

    #[test]
    fn failed_update_leaves_review_unchanged() {
        let mut r = review();
        let before = r.clone();
        let err = r.update_review(Some(9), Some("New comment")).unwrap_err();
        assert!(matches!(err, ModelError::RatingOutOfRange(9)));
        assert_eq!(r, before);
    }

    #[test]
    fn serde_roundtrip() {
        let r = review();
        let json = serde_json::to_value(&r).unwrap();
        let parsed: Review = serde_json::from_value(json).unwrap();
        assert_eq!(r, parsed);
    }
}
