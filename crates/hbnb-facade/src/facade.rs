use tracing::debug;

use hbnb_store::Repository;
use hbnb_types::{Amenity, Entity, EntityId, Place, Review, User};

use crate::error::{FacadeError, FacadeResult};
use crate::input::{AmenityPatch, NewPlace, NewReview, NewUser, PlacePatch, ReviewPatch, UserPatch};
use crate::views::PlaceView;

/// High-level HBnB service API.
///
/// Construct one per process with an explicitly injected repository and
/// share it with the transport layer. The constructor registers the
/// domain's unique fields, so uniqueness is enforced from the first
/// write onward.
pub struct HbnbFacade<R: Repository> {
    repo: R,
}

impl<R: Repository> HbnbFacade<R> {
    /// Wrap a repository and register the domain's unique fields.
    pub fn new(repo: R) -> Self {
        repo.register_unique_field(User::KIND, "email");
        repo.register_unique_field(Amenity::KIND, "name");
        Self { repo }
    }

    /// The underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    fn require_user(&self, id: &EntityId) -> FacadeResult<User> {
        self.repo.get_entity(id)?.ok_or_else(|| FacadeError::NotFound {
            kind: User::KIND.into(),
            id: id.to_string(),
        })
    }

    fn require_place(&self, id: &EntityId) -> FacadeResult<Place> {
        self.repo.get_entity(id)?.ok_or_else(|| FacadeError::NotFound {
            kind: Place::KIND.into(),
            id: id.to_string(),
        })
    }

    fn require_amenity(&self, id: &EntityId) -> FacadeResult<Amenity> {
        self.repo.get_entity(id)?.ok_or_else(|| FacadeError::NotFound {
            kind: Amenity::KIND.into(),
            id: id.to_string(),
        })
    }

    fn require_review(&self, id: &EntityId) -> FacadeResult<Review> {
        self.repo.get_entity(id)?.ok_or_else(|| FacadeError::NotFound {
            kind: Review::KIND.into(),
            id: id.to_string(),
        })
    }

    fn resolve_amenities(&self, ids: &[EntityId]) -> FacadeResult<Vec<Amenity>> {
        ids.iter().map(|id| self.require_amenity(id)).collect()
    }

    /// Build a [`PlaceView`], skipping amenity/review links whose
    /// target has since disappeared.
    fn place_view(&self, place: &Place) -> FacadeResult<PlaceView> {
        let owner = self.require_user(&place.owner_id)?;
        let amenities: Vec<Amenity> = place
            .amenity_ids
            .iter()
            .filter_map(|id| self.repo.get_entity(id).transpose())
            .collect::<Result<_, _>>()?;
        let reviews: Vec<Review> = place
            .review_ids
            .iter()
            .filter_map(|id| self.repo.get_entity(id).transpose())
            .collect::<Result<_, _>>()?;
        Ok(PlaceView::assemble(place, &owner, &amenities, &reviews))
    }

    // ---- Users ----

    pub fn create_user(&self, input: NewUser) -> FacadeResult<User> {
        let user = User::new(
            &input.first_name,
            &input.last_name,
            &input.email,
            &input.password_hash,
            input.is_admin,
        )?;
        let stored = self.repo.add_entity(&user)?;
        debug!(user = %stored.id, email = %stored.email, "user created");
        Ok(stored)
    }

    pub fn get_user(&self, id: &EntityId) -> FacadeResult<Option<User>> {
        Ok(self.repo.get_entity(id)?)
    }

    pub fn get_user_by_email(&self, email: &str) -> FacadeResult<Option<User>> {
        let normalized = email.trim().to_lowercase();
        Ok(self.repo.find_entity_by_field("email", &normalized)?)
    }

    pub fn list_users(&self) -> FacadeResult<Vec<User>> {
        Ok(self.repo.list_entities()?)
    }

    pub fn update_user(&self, id: &EntityId, patch: UserPatch) -> FacadeResult<User> {
        let mut user = self.require_user(id)?;
        user.update_profile(
            patch.first_name.as_deref(),
            patch.last_name.as_deref(),
            patch.email.as_deref(),
        )?;
        let stored = self.repo.update_entity(&user)?;
        debug!(user = %stored.id, "user updated");
        Ok(stored)
    }

    /// Delete a user together with everything they own: their places
    /// (and those places' reviews) and the reviews they wrote.
    pub fn delete_user(&self, id: &EntityId) -> FacadeResult<bool> {
        let Some(user) = self.repo.get_entity::<User>(id)? else {
            return Ok(false);
        };
        for place_id in &user.place_ids {
            self.delete_place(place_id)?;
        }
        // Deleting owned places may already have removed reviews this
        // user wrote about them; work from a fresh copy of the links.
        if let Some(user) = self.repo.get_entity::<User>(id)? {
            for review_id in &user.review_ids {
                self.delete_review(review_id)?;
            }
        }
        let removed = self.repo.delete_entity::<User>(id)?;
        debug!(user = %id, "user deleted");
        Ok(removed)
    }

    // ---- Amenities ----

    pub fn create_amenity(&self, name: &str) -> FacadeResult<Amenity> {
        let amenity = Amenity::new(name)?;
        let stored = self.repo.add_entity(&amenity)?;
        debug!(amenity = %stored.id, name = %stored.name, "amenity created");
        Ok(stored)
    }

    pub fn get_amenity(&self, id: &EntityId) -> FacadeResult<Option<Amenity>> {
        Ok(self.repo.get_entity(id)?)
    }

    pub fn list_amenities(&self) -> FacadeResult<Vec<Amenity>> {
        Ok(self.repo.list_entities()?)
    }

    pub fn update_amenity(&self, id: &EntityId, patch: AmenityPatch) -> FacadeResult<Amenity> {
        let mut amenity = self.require_amenity(id)?;
        if let Some(name) = patch.name.as_deref() {
            amenity.rename(name)?;
        }
        let stored = self.repo.update_entity(&amenity)?;
        debug!(amenity = %stored.id, "amenity updated");
        Ok(stored)
    }

    /// Delete an amenity and detach it from every place carrying it.
    pub fn delete_amenity(&self, id: &EntityId) -> FacadeResult<bool> {
        if self.repo.get_entity::<Amenity>(id)?.is_none() {
            return Ok(false);
        }
        for mut place in self.repo.list_entities::<Place>()? {
            if place.remove_amenity(id) {
                self.repo.update_entity(&place)?;
            }
        }
        let removed = self.repo.delete_entity::<Amenity>(id)?;
        debug!(amenity = %id, "amenity deleted");
        Ok(removed)
    }

    // ---- Places ----

    pub fn create_place(&self, input: NewPlace) -> FacadeResult<PlaceView> {
        let mut owner = self.require_user(&input.owner_id)?;
        let amenities = self.resolve_amenities(&input.amenity_ids)?;

        let mut place = Place::new(
            owner.id,
            &input.title,
            &input.description,
            input.price_per_night,
            input.latitude,
            input.longitude,
        )?;
        for amenity in &amenities {
            place.add_amenity(amenity.id);
        }

        let stored = self.repo.add_entity(&place)?;
        owner.link_place(stored.id);
        let owner = self.repo.update_entity(&owner)?;
        debug!(place = %stored.id, owner = %owner.id, "place created");
        Ok(PlaceView::assemble(&stored, &owner, &amenities, &[]))
    }

    pub fn get_place(&self, id: &EntityId) -> FacadeResult<Option<PlaceView>> {
        match self.repo.get_entity::<Place>(id)? {
            Some(place) => Ok(Some(self.place_view(&place)?)),
            None => Ok(None),
        }
    }

    pub fn list_places(&self) -> FacadeResult<Vec<PlaceView>> {
        self.repo
            .list_entities::<Place>()?
            .iter()
            .map(|place| self.place_view(place))
            .collect()
    }

    pub fn update_place(&self, id: &EntityId, patch: PlacePatch) -> FacadeResult<PlaceView> {
        let mut place = self.require_place(id)?;
        place.update_details(
            patch.title.as_deref(),
            patch.description.as_deref(),
            patch.price_per_night,
            patch.latitude,
            patch.longitude,
        )?;
        if let Some(amenity_ids) = &patch.amenity_ids {
            let amenities = self.resolve_amenities(amenity_ids)?;
            place.set_amenities(amenities.iter().map(|a| a.id));
        }
        let stored = self.repo.update_entity(&place)?;
        debug!(place = %stored.id, "place updated");
        self.place_view(&stored)
    }

    /// Delete a place together with its reviews, unlinking both the
    /// owner and each review's author.
    pub fn delete_place(&self, id: &EntityId) -> FacadeResult<bool> {
        let Some(place) = self.repo.get_entity::<Place>(id)? else {
            return Ok(false);
        };
        for review_id in &place.review_ids {
            if let Some(review) = self.repo.get_entity::<Review>(review_id)? {
                if let Some(mut author) = self.repo.get_entity::<User>(&review.user_id)? {
                    author.unlink_review(review_id);
                    self.repo.update_entity(&author)?;
                }
                self.repo.delete_entity::<Review>(review_id)?;
            }
        }
        if let Some(mut owner) = self.repo.get_entity::<User>(&place.owner_id)? {
            owner.unlink_place(id);
            self.repo.update_entity(&owner)?;
        }
        let removed = self.repo.delete_entity::<Place>(id)?;
        debug!(place = %id, "place deleted");
        Ok(removed)
    }

    // ---- Reviews ----

    pub fn create_review(&self, input: NewReview) -> FacadeResult<Review> {
        let mut author = self.require_user(&input.user_id)?;
        let mut place = self.require_place(&input.place_id)?;

        let review = Review::new(author.id, place.id, input.rating, &input.comment)?;
        let stored = self.repo.add_entity(&review)?;

        place.link_review(stored.id);
        self.repo.update_entity(&place)?;
        author.link_review(stored.id);
        self.repo.update_entity(&author)?;

        debug!(review = %stored.id, place = %place.id, "review created");
        Ok(stored)
    }

    pub fn get_review(&self, id: &EntityId) -> FacadeResult<Option<Review>> {
        Ok(self.repo.get_entity(id)?)
    }

    pub fn list_reviews(&self) -> FacadeResult<Vec<Review>> {
        Ok(self.repo.list_entities()?)
    }

    pub fn update_review(&self, id: &EntityId, patch: ReviewPatch) -> FacadeResult<Review> {
        let mut review = self.require_review(id)?;
        review.update_review(patch.rating, patch.comment.as_deref())?;
        let stored = self.repo.update_entity(&review)?;
        debug!(review = %stored.id, "review updated");
        Ok(stored)
    }

    /// Delete a review and unlink it from its place and author.
    pub fn delete_review(&self, id: &EntityId) -> FacadeResult<bool> {
        let Some(review) = self.repo.get_entity::<Review>(id)? else {
            return Ok(false);
        };
        if let Some(mut place) = self.repo.get_entity::<Place>(&review.place_id)? {
            place.unlink_review(id);
            self.repo.update_entity(&place)?;
        }
        if let Some(mut author) = self.repo.get_entity::<User>(&review.user_id)? {
            author.unlink_review(id);
            self.repo.update_entity(&author)?;
        }
        let removed = self.repo.delete_entity::<Review>(id)?;
        debug!(review = %id, "review deleted");
        Ok(removed)
    }

    /// All reviews written about a place, in link order.
    pub fn place_reviews(&self, place_id: &EntityId) -> FacadeResult<Vec<Review>> {
        let place = self.require_place(place_id)?;
        place
            .review_ids
            .iter()
            .filter_map(|id| self.repo.get_entity(id).transpose())
            .collect::<Result<_, _>>()
            .map_err(FacadeError::from)
    }
}
