//! `solobill-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP): the error
//! model, server-assigned identifiers and the `Money` value type shared by the
//! catalog and sales crates.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ItemId, SaleId};
pub use money::Money;
pub use value_object::ValueObject;
