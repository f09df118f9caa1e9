//! Committed sales as reported by the server.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use solobill_core::{Entity, ItemId, Money, SaleId};

/// Summary row of `GET /api/sales`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommittedSale {
    #[serde(rename = "selling_id")]
    pub id: SaleId,
    pub customer_name: String,
    #[serde(default)]
    pub items_count: u32,
    pub total_amount: Money,
    #[serde(default)]
    pub discount: Money,
    pub grand_total: Money,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Parse a sale timestamp as the backend may send it: RFC 3339, the
/// RFC 2822 HTTP-date `jsonify` emits, or a bare SQLite `CURRENT_TIMESTAMP`
/// (which is UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(at) = DateTime::parse_from_rfc2822(raw) {
        return Some(at.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Unrecognised timestamps become `None` rather than failing the whole row.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

impl Entity for CommittedSale {
    type Id = SaleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Response of `POST /api/sales`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleCreated {
    pub selling_id: SaleId,
    #[serde(default)]
    pub message: String,
}

/// One item row of a committed sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleDetailLine {
    pub item_id: ItemId,
    #[serde(default)]
    pub item_name: String,
    pub quantity: u32,
    #[serde(alias = "sell_price")]
    pub unit_price: Money,
}

impl SaleDetailLine {
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Response of `GET /api/sales/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDetails {
    pub order: CommittedSale,
    #[serde(default)]
    pub items: Vec<SaleDetailLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sales_list_row() {
        let json = r#"{
            "selling_id": 4,
            "customer_id": 1,
            "customer_name": "Alice",
            "total_amount": "49.95",
            "discount": "5.00",
            "grand_total": "44.95",
            "items_count": 2
        }"#;
        let sale: CommittedSale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.id, SaleId::new(4));
        assert_eq!(sale.items_count, 2);
        assert_eq!(sale.grand_total, Money::from_cents(4495));
        assert_eq!(sale.created_at, None);
    }

    fn sale_at(created_at: &str) -> CommittedSale {
        let json = format!(
            r#"{{"selling_id":1,"customer_name":"Bob","total_amount":5,"grand_total":5,"created_at":"{created_at}"}}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    fn jan_first_ten_am() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn created_at_accepts_rfc3339() {
        assert_eq!(sale_at("2024-01-01T10:00:00Z").created_at, Some(jan_first_ten_am()));
        assert_eq!(
            sale_at("2024-01-01T12:00:00+02:00").created_at,
            Some(jan_first_ten_am())
        );
    }

    #[test]
    fn created_at_accepts_http_date() {
        assert_eq!(
            sale_at("Mon, 01 Jan 2024 10:00:00 GMT").created_at,
            Some(jan_first_ten_am())
        );
    }

    #[test]
    fn created_at_accepts_sqlite_timestamp_as_utc() {
        assert_eq!(sale_at("2024-01-01 10:00:00").created_at, Some(jan_first_ten_am()));
    }

    #[test]
    fn unreadable_created_at_keeps_the_row() {
        let sale = sale_at("yesterday");
        assert_eq!(sale.created_at, None);
        assert_eq!(sale.customer_name, "Bob");

        let json = r#"{"selling_id":1,"customer_name":"Bob","total_amount":5,"grand_total":5,"created_at":null}"#;
        let sale: CommittedSale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.created_at, None);
    }

    #[test]
    fn missing_items_count_defaults_to_zero() {
        let json = r#"{"selling_id":1,"customer_name":"Bob","total_amount":0,"discount":0,"grand_total":0}"#;
        let sale: CommittedSale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.items_count, 0);
    }

    #[test]
    fn detail_lines_accept_sell_price_alias() {
        let json = r#"{
            "order": {"selling_id":1,"customer_name":"Bob","total_amount":19.98,"discount":0,"grand_total":19.98},
            "items": [{"item_id":1,"item_name":"Widget","quantity":2,"sell_price":9.99}]
        }"#;
        let details: SaleDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.items[0].line_total(), Money::from_cents(1998));
    }
}
