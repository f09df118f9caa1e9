//! Item catalog domain module.
//!
//! Catalog items are owned by the server; this crate models the fetched
//! records, the item form used to create or update them, and the in-memory
//! snapshot the order workflow selects from.

pub mod item;
pub mod snapshot;

pub use item::{CatalogItem, ItemCreated, ItemDraft};
pub use snapshot::CatalogSnapshot;
