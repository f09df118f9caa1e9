//! Collaborator contracts for the Item Catalog and Sales APIs.
//!
//! Controllers are generic over these traits so they can run against the HTTP
//! backend in production and an in-memory fake in tests.

use std::sync::Arc;

use async_trait::async_trait;

use solobill_catalog::{CatalogItem, ItemCreated, ItemDraft};
use solobill_core::{ItemId, SaleId};
use solobill_sales::{CommittedSale, SaleCreated, SaleDetails, SalePayload};

use crate::error::ClientError;

#[async_trait]
pub trait ItemCatalogApi: Send + Sync {
    /// All items, in server order.
    async fn list_items(&self) -> Result<Vec<CatalogItem>, ClientError>;

    async fn create_item(&self, draft: &ItemDraft) -> Result<ItemCreated, ClientError>;

    async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> Result<(), ClientError>;

    async fn delete_item(&self, id: ItemId) -> Result<(), ClientError>;
}

#[async_trait]
pub trait SalesApi: Send + Sync {
    /// Committed sale summaries, newest first (server order).
    async fn list_sales(&self) -> Result<Vec<CommittedSale>, ClientError>;

    async fn create_sale(&self, payload: &SalePayload) -> Result<SaleCreated, ClientError>;

    async fn sale_details(&self, id: SaleId) -> Result<SaleDetails, ClientError>;

    async fn delete_sale(&self, id: SaleId) -> Result<(), ClientError>;
}

#[async_trait]
impl<T: ItemCatalogApi + ?Sized> ItemCatalogApi for Arc<T> {
    async fn list_items(&self) -> Result<Vec<CatalogItem>, ClientError> {
        (**self).list_items().await
    }

    async fn create_item(&self, draft: &ItemDraft) -> Result<ItemCreated, ClientError> {
        (**self).create_item(draft).await
    }

    async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> Result<(), ClientError> {
        (**self).update_item(id, draft).await
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), ClientError> {
        (**self).delete_item(id).await
    }
}

#[async_trait]
impl<T: SalesApi + ?Sized> SalesApi for Arc<T> {
    async fn list_sales(&self) -> Result<Vec<CommittedSale>, ClientError> {
        (**self).list_sales().await
    }

    async fn create_sale(&self, payload: &SalePayload) -> Result<SaleCreated, ClientError> {
        (**self).create_sale(payload).await
    }

    async fn sale_details(&self, id: SaleId) -> Result<SaleDetails, ClientError> {
        (**self).sale_details(id).await
    }

    async fn delete_sale(&self, id: SaleId) -> Result<(), ClientError> {
        (**self).delete_sale(id).await
    }
}
