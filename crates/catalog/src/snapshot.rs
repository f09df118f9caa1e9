//! In-memory catalog snapshot.
//!
//! The item list is fetched once per workflow start (or on demand) and the
//! order workflow selects from it by `ItemId`. Selections never carry a
//! serialized copy of the item; they resolve through this index.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use solobill_core::{Entity, ItemId};

use crate::item::CatalogItem;

/// Immutable snapshot of the catalog as returned by the server.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    items: Vec<CatalogItem>,
    index: HashMap<ItemId, usize>,
    fetched_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    /// Build a snapshot preserving server order.
    ///
    /// If the server repeats an id, the first occurrence wins the lookup.
    pub fn new(items: Vec<CatalogItem>, fetched_at: DateTime<Utc>) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            index.entry(*item.id()).or_insert(pos);
        }
        Self {
            items,
            index,
            fetched_at,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Utc::now())
    }

    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
