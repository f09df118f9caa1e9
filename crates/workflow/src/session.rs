//! Per-session wiring.
//!
//! One session = one backend handle, one view, and one instance of each
//! controller. The draft order lives inside `order` for the whole session
//! and is never shared.

use std::sync::Arc;

use anyhow::Context;

use solobill_catalog::CatalogItem;
use solobill_client::{ClientConfig, HttpBackend, ItemCatalogApi, SalesApi};
use solobill_core::ItemId;
use solobill_sales::SaleCreated;

use crate::error::WorkflowError;
use crate::history::SalesHistory;
use crate::items::ItemEditor;
use crate::notice::WorkflowView;
use crate::order::OrderWorkflow;

pub struct Session<A, V> {
    pub items: ItemEditor<A, Arc<V>>,
    pub order: OrderWorkflow<A, Arc<V>>,
    pub history: SalesHistory<A, Arc<V>>,
}

impl<V: WorkflowView> Session<HttpBackend, V> {
    /// Build the HTTP backend from `config` and wire the controllers to it.
    pub fn open(config: &ClientConfig, view: Arc<V>) -> anyhow::Result<Self> {
        let backend = HttpBackend::new(config)
            .with_context(|| format!("failed to build HTTP client for {}", config.api_url))?;
        tracing::info!(api_url = %config.api_url, "session opened");
        Ok(Self::with_backend(backend, view))
    }
}

impl<A, V> Session<A, V>
where
    A: ItemCatalogApi + SalesApi + Clone,
    V: WorkflowView,
{
    pub fn with_backend(api: A, view: Arc<V>) -> Self {
        Self {
            items: ItemEditor::new(api.clone(), view.clone()),
            order: OrderWorkflow::new(api.clone(), view.clone()),
            history: SalesHistory::new(api, view),
        }
    }

    /// Load the catalog and the committed sales list.
    pub async fn start(&mut self) -> anyhow::Result<()> {
        self.items
            .refresh()
            .await
            .context("failed to load item catalog")?;
        self.history
            .refresh()
            .await
            .context("failed to load sales list")?;
        Ok(())
    }

    /// Stage an item from the editor's current catalog snapshot.
    pub fn select_item(&mut self, item_id: ItemId) -> Result<&CatalogItem, WorkflowError> {
        self.order.select_item(self.items.snapshot(), item_id)
    }

    /// Submit the draft and, on success, re-fetch the sales list.
    pub async fn submit_order(&mut self, customer_name: &str) -> Result<SaleCreated, WorkflowError> {
        let created = self.order.submit(customer_name).await?;
        if let Err(err) = self.history.refresh().await {
            tracing::warn!(error = %err, "sales refresh after submission failed");
        }
        Ok(created)
    }
}
