//! Submission payload for `POST /api/sales`.

use serde::{Deserialize, Serialize};

use solobill_core::{DomainError, DomainResult, ItemId, Money};

use crate::draft::{DraftLine, DraftOrder};

pub const CUSTOMER_NAME_REQUIRED: &str = "customer name required";
pub const NO_ITEMS: &str = "no items";

/// One submitted line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadLine {
    pub item_id: ItemId,
    pub item_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

impl From<&DraftLine> for PayloadLine {
    fn from(line: &DraftLine) -> Self {
        Self {
            item_id: line.item_id(),
            item_name: line.name().to_string(),
            quantity: line.quantity().get(),
            unit_price: line.unit_price(),
            line_total: line.line_total(),
        }
    }
}

/// Serialized draft order. `total_amount` is the subtotal (server column name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalePayload {
    pub customer_name: String,
    pub items: Vec<PayloadLine>,
    pub total_amount: Money,
    pub discount: Money,
    pub grand_total: Money,
}

impl DraftOrder {
    /// Validate the draft for submission and serialize it.
    ///
    /// The customer name is checked first, then that there is at least one line.
    pub fn to_payload(&self, customer_name: &str) -> DomainResult<SalePayload> {
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            return Err(DomainError::validation(CUSTOMER_NAME_REQUIRED));
        }
        if self.is_empty() {
            return Err(DomainError::validation(NO_ITEMS));
        }

        let totals = self.totals();
        Ok(SalePayload {
            customer_name: customer_name.to_string(),
            items: self.lines().iter().map(PayloadLine::from).collect(),
            total_amount: totals.subtotal,
            discount: totals.discount,
            grand_total: totals.grand_total,
        })
    }
}
