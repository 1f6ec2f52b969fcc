//! Service layer for the HBnB core.
//!
//! [`HbnbFacade`] is the single entry point a transport layer talks to:
//! it constructs and validates domain models, runs them through an
//! injected [`Repository`](hbnb_store::Repository), keeps relationship
//! links (owner ↔ place, place ↔ review, user ↔ review) consistent,
//! and classifies every failure as conflict, not-found, or validation
//! via [`FacadeError`].
//!
//! The facade owns no storage of its own and holds no global state: the
//! repository is passed in at construction, so its lifecycle is tied to
//! whatever process hosts the facade.
//!
//! # Modules
//!
//! - [`error`] — [`FacadeError`] and the transport-facing error classes
//! - [`input`] — typed create/patch inputs (unknown keys rejected)
//! - [`views`] — response shapes with embedded relationships
//! - [`facade`] — the [`HbnbFacade`] operations

pub mod error;
pub mod facade;
pub mod input;
pub mod views;

pub use error::{FacadeError, FacadeResult};
pub use facade::HbnbFacade;
pub use input::{
    AmenityPatch, NewPlace, NewReview, NewUser, PlacePatch, ReviewPatch, UserPatch,
};
pub use views::{AmenityView, OwnerView, PlaceView, ReviewView};
