//! Foundation types for the HBnB core.
//!
//! This crate provides the identity, temporal, and domain types used
//! throughout the HBnB system. Every other HBnB crate depends on
//! `hbnb-types`.
//!
//! # Key Types
//!
//! - [`EntityId`] — UUID-backed entity identifier
//! - [`Stamps`] — creation/modification timestamp pair
//! - [`Entity`] — trait tying a domain type to its type tag and identifier
//! - [`User`], [`Place`], [`Amenity`], [`Review`] — the four domain models
//!
//! Domain models own field-level validation: constructors and mutators
//! reject malformed values with [`ModelError`] before an entity ever
//! reaches a repository. Storage layers treat entities as opaque.

pub mod amenity;
pub mod entity;
pub mod error;
pub mod id;
pub mod place;
pub mod review;
pub mod stamps;
pub mod user;
pub mod validate;

pub use amenity::Amenity;
pub use entity::Entity;
pub use error::ModelError;
pub use id::EntityId;
pub use place::Place;
pub use review::Review;
pub use stamps::Stamps;
pub use user::User;
