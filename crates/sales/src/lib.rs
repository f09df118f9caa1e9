//! Sales domain module.
//!
//! Holds the draft order model the workflow builds on the client, the
//! payload it submits, and the committed-sale records the server returns.
//! Pure domain logic: no IO, no HTTP.

pub mod bill;
pub mod draft;
pub mod payload;
pub mod quantity;
pub mod sale;

pub use bill::{Bill, BillRow};
pub use draft::{DraftLine, DraftOrder, Totals};
pub use payload::{CUSTOMER_NAME_REQUIRED, NO_ITEMS, PayloadLine, SalePayload};
pub use quantity::Quantity;
pub use sale::{CommittedSale, SaleCreated, SaleDetailLine, SaleDetails};
