//! Learning resource model and catalog store.
//!
//! This crate provides:
//! - The [`LearningResource`] value type and its validation invariants.
//! - The [`ResourceCatalog`] capability trait (`list_all` / `get_by_id`).
//! - An order-preserving [`InMemoryCatalog`] with a JSON loader.
//!
//! Catalog entries are immutable reference data refreshed out-of-band; the
//! engine never mutates them.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Catalog store implementations and the capability trait.
pub mod store;
/// Resource value types and validation.
pub mod types;

pub use store::{load_catalog, InMemoryCatalog, ResourceCatalog};
pub use types::{CatalogError, Difficulty, LearningResource, ResourceType};
