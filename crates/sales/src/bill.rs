//! Print-ready bill for a committed sale.

use core::fmt;

use chrono::{DateTime, Utc};

use solobill_core::{Money, SaleId};

use crate::sale::SaleDetails;

const RULE_WIDTH: usize = 44;
const NAME_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillRow {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

/// Plain-text bill. Totals are the ones the server recorded for the sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    pub sale_id: SaleId,
    pub customer_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub rows: Vec<BillRow>,
    pub subtotal: Money,
    pub discount: Money,
    pub grand_total: Money,
}

impl Bill {
    pub fn from_details(details: &SaleDetails) -> Self {
        let rows = details
            .items
            .iter()
            .map(|line| BillRow {
                name: line.item_name.chars().take(NAME_WIDTH).collect(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                line_total: line.line_total(),
            })
            .collect();

        Self {
            sale_id: details.order.id,
            customer_name: details.order.customer_name.clone(),
            created_at: details.order.created_at,
            rows,
            subtotal: details.order.total_amount,
            discount: details.order.discount,
            grand_total: details.order.grand_total,
        }
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(f, "Sale #{}", self.sale_id)?;
        writeln!(f, "Customer: {}", self.customer_name)?;
        if let Some(at) = self.created_at {
            writeln!(f, "Date: {}", at.format("%Y-%m-%d %H:%M UTC"))?;
        }
        writeln!(f, "{rule}")?;
        writeln!(f, "{:<20}{:>5}{:>9}{:>10}", "Item", "Qty", "Price", "Total")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<20}{:>5}{:>9}{:>10}",
                row.name,
                row.quantity,
                row.unit_price.plain(),
                row.line_total.plain()
            )?;
        }
        writeln!(f, "{rule}")?;
        writeln!(f, "{:<34}{:>10}", "Subtotal", self.subtotal.plain())?;
        writeln!(f, "{:<34}{:>10}", "Discount", self.discount.plain())?;
        writeln!(f, "{:<34}{:>10}", "Grand total", self.grand_total.plain())
    }
}
