use serde::{Deserialize, Serialize};

use solobill_core::{DomainError, DomainResult, Entity, ItemId, Money};

/// A sellable inventory entry as returned by `GET /api/items`.
///
/// Field names follow the server's `item_record` columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(rename = "item_id")]
    pub id: ItemId,
    #[serde(rename = "item_name")]
    pub name: String,
    pub cost_price: Money,
    pub sell_price: Money,
}

impl CatalogItem {
    pub fn new(id: ItemId, name: impl Into<String>, cost_price: Money, sell_price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            cost_price,
            sell_price,
        }
    }

    /// Price charged per unit when the item is added to an order.
    pub fn unit_price(&self) -> Money {
        self.sell_price
    }

    /// Markup over cost in percent, `None` when the cost is zero.
    pub fn margin_percent(&self) -> Option<f64> {
        if self.cost_price.is_zero() {
            return None;
        }
        let cost = self.cost_price.cents() as f64;
        let sell = self.sell_price.cents() as f64;
        Some((sell - cost) / cost * 100.0)
    }
}

impl Entity for CatalogItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validated item form, sent as the body of `POST /api/items` and
/// `PUT /api/items/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    #[serde(rename = "item_name")]
    name: String,
    cost_price: Money,
    sell_price: Money,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, cost_price: Money, sell_price: Money) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("item name required"));
        }
        if cost_price.is_negative() {
            return Err(DomainError::validation("cost price must not be negative"));
        }
        if sell_price.is_negative() {
            return Err(DomainError::validation("sell price must not be negative"));
        }
        Ok(Self {
            name,
            cost_price,
            sell_price,
        })
    }

    /// Build a draft from raw form fields.
    pub fn parse(name: &str, cost_price: &str, sell_price: &str) -> DomainResult<Self> {
        let cost = Money::parse(cost_price)
            .map_err(|_| DomainError::validation("cost price must be a number"))?;
        let sell = Money::parse(sell_price)
            .map_err(|_| DomainError::validation("sell price must be a number"))?;
        Self::new(name, cost, sell)
    }

    /// Prefill the form from an existing item (edit mode).
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            cost_price: item.cost_price,
            sell_price: item.sell_price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost_price(&self) -> Money {
        self.cost_price
    }

    pub fn sell_price(&self) -> Money {
        self.sell_price
    }
}

/// Response of `POST /api/items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCreated {
    pub item_id: ItemId,
    #[serde(default)]
    pub message: String,
}
