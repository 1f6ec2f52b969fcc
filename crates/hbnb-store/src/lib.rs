//! Keyed object store for the HBnB core.
//!
//! This crate implements a type-partitioned, in-memory key/value store
//! for domain entities. Entities are held as type-erased
//! [`StoredRecord`]s, bucketed by their type tag (`"User"`, `"Place"`,
//! ...), keyed by identifier, with optional per-field uniqueness
//! enforcement (e.g. at most one `User` per email).
//!
//! # Storage Backends
//!
//! All backends implement the [`Repository`] trait:
//!
//! - [`InMemoryRepository`] -- `HashMap`-based store with a parallel
//!   unique-field index, for process-lifetime persistence.
//!
//! # Design Rules
//!
//! 1. Buckets are independent: the same identifier may exist under two
//!    different kinds without collision.
//! 2. A bucket and its unique-field indexes mutate together, under one
//!    lock. No observer sees one without the other.
//! 3. Every rejected write (`UniquenessViolation`, `NotFound`) leaves
//!    the store unchanged. All-or-nothing per call.
//! 4. `list` returns entities in insertion order.
//! 5. The store never validates entity fields; domain models do that
//!    before a record reaches the store.
//! 6. The store never logs, retries, or falls back -- failures are
//!    surfaced synchronously to the caller.

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRepository;
pub use record::StoredRecord;
pub use traits::Repository;
