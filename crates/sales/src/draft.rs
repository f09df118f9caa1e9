//! Draft order model.
//!
//! The order being assembled on the client before it is submitted. All totals
//! are derived from `lines` and `discount` on every read; nothing derived is
//! stored, so a line total can never disagree with its price and quantity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use solobill_catalog::CatalogItem;
use solobill_core::{DomainError, DomainResult, ItemId, Money};

use crate::quantity::Quantity;

/// One row of the draft order.
///
/// `name` and `unit_price` are copied from the catalog when the line is first
/// added and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftLine {
    item_id: ItemId,
    name: String,
    unit_price: Money,
    quantity: Quantity,
}

impl DraftLine {
    fn from_item(item: &CatalogItem, quantity: Quantity) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            unit_price: item.unit_price(),
            quantity,
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity.get())
    }
}

/// Derived totals of a draft order at one point in time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Money,
    pub discount: Money,
    pub grand_total: Money,
}

impl Totals {
    /// True when the discount pushes the grand total below zero.
    ///
    /// The grand total is reported as-is; callers use this to explain it.
    pub fn discount_exceeds_subtotal(&self) -> bool {
        self.grand_total.is_negative()
    }
}

/// The order currently being assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOrder {
    id: Uuid,
    lines: Vec<DraftLine>,
    discount: Money,
}

impl DraftOrder {
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            lines: Vec::new(),
            discount: Money::ZERO,
        }
    }

    /// Client-side identifier of this draft, for log correlation only.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&DraftLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn discount(&self) -> Money {
        self.discount
    }

    /// Add `quantity` units of `item`.
    ///
    /// An item already on the order has its quantity increased instead of
    /// getting a second row. Returns the index of the affected line.
    pub fn add_line(&mut self, item: &CatalogItem, quantity: Quantity) -> usize {
        if let Some(pos) = self.lines.iter().position(|l| l.item_id == item.id) {
            let line = &mut self.lines[pos];
            line.quantity = line.quantity.saturating_add(quantity);
            return pos;
        }
        self.lines.push(DraftLine::from_item(item, quantity));
        self.lines.len() - 1
    }

    pub fn update_line_quantity(&mut self, index: usize, quantity: Quantity) -> DomainResult<()> {
        let line = self.lines.get_mut(index).ok_or_else(DomainError::not_found)?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn remove_line(&mut self, index: usize) -> DomainResult<DraftLine> {
        if index >= self.lines.len() {
            return Err(DomainError::not_found());
        }
        Ok(self.lines.remove(index))
    }

    /// Replace the discount. Negative amounts are stored as zero.
    pub fn set_discount(&mut self, amount: Money) {
        self.discount = amount.clamp_non_negative();
    }

    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(DraftLine::line_total).sum()
    }

    /// `subtotal - discount`; may be negative when the discount is larger.
    pub fn grand_total(&self) -> Money {
        self.subtotal() - self.discount
    }

    pub fn totals(&self) -> Totals {
        let subtotal = self.subtotal();
        Totals {
            subtotal,
            discount: self.discount,
            grand_total: subtotal - self.discount,
        }
    }

    /// Start over with an empty draft under a fresh id.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for DraftOrder {
    fn default() -> Self {
        Self::new()
    }
}
