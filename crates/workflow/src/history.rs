//! Committed sales browser.

use solobill_client::{ClientError, SalesApi};
use solobill_core::SaleId;
use solobill_sales::{Bill, CommittedSale, SaleDetails};

use crate::error::WorkflowError;
use crate::notice::{WorkflowNotice, WorkflowView};

pub struct SalesHistory<A, V> {
    api: A,
    view: V,
    sales: Vec<CommittedSale>,
}

impl<A, V> SalesHistory<A, V>
where
    A: SalesApi,
    V: WorkflowView,
{
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            sales: Vec::new(),
        }
    }

    /// Sales as of the last successful refresh, in server order.
    pub fn sales(&self) -> &[CommittedSale] {
        &self.sales
    }

    pub async fn refresh(&mut self) -> Result<&[CommittedSale], WorkflowError> {
        match self.api.list_sales().await {
            Ok(sales) => {
                self.view
                    .notify(WorkflowNotice::SalesListed(sales.clone()));
                self.sales = sales;
                Ok(&self.sales)
            }
            Err(err) => Err(self.request_failed(err)),
        }
    }

    pub async fn details(&self, id: SaleId) -> Result<SaleDetails, WorkflowError> {
        self.api
            .sale_details(id)
            .await
            .map_err(|err| self.request_failed(err))
    }

    /// Fetch one sale and lay it out as a printable bill.
    pub async fn bill(&self, id: SaleId) -> Result<Bill, WorkflowError> {
        let details = self.details(id).await?;
        Ok(Bill::from_details(&details))
    }

    pub async fn delete(&mut self, id: SaleId) -> Result<(), WorkflowError> {
        if let Err(err) = self.api.delete_sale(id).await {
            return Err(self.request_failed(err));
        }
        tracing::info!(selling_id = %id, "sale deleted");

        if let Err(err) = self.refresh().await {
            tracing::warn!(error = %err, "sales refresh after delete failed");
        }
        Ok(())
    }

    fn request_failed(&self, err: ClientError) -> WorkflowError {
        self.view
            .notify(WorkflowNotice::RequestFailed(err.user_message()));
        WorkflowError::Request(err)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use solobill_catalog::CatalogSnapshot;
    use solobill_core::{ItemId, Money};

    use super::*;
    use crate::fake::{FakeBackend, widget};
    use crate::notice::RecordingView;
    use crate::order::OrderWorkflow;

    async fn backend_with_one_sale() -> Arc<FakeBackend> {
        let backend = FakeBackend::with_items(vec![widget()]);
        let catalog = CatalogSnapshot::new(vec![widget()], Utc::now());
        let mut order = OrderWorkflow::new(backend.clone(), Arc::new(RecordingView::new()));
        order.select_item(&catalog, ItemId::new(1)).unwrap();
        order.commit_selection("5").unwrap();
        order.apply_discount("5").unwrap();
        order.submit("Alice").await.unwrap();
        backend
    }

    #[tokio::test]
    async fn refresh_lists_sales() {
        let backend = backend_with_one_sale().await;
        let view = Arc::new(RecordingView::new());
        let mut history = SalesHistory::new(backend, view.clone());

        let sales = history.refresh().await.unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].grand_total, Money::from_cents(4495));
        assert_eq!(view.kinds(), ["sales.listed"]);
    }

    #[tokio::test]
    async fn bill_renders_committed_sale() {
        let backend = backend_with_one_sale().await;
        let history = SalesHistory::new(backend, Arc::new(RecordingView::new()));

        let bill = history.bill(SaleId::new(1)).await.unwrap();
        assert_eq!(bill.customer_name, "Alice");
        assert_eq!(bill.rows[0].line_total, Money::from_cents(4995));

        let text = bill.to_string();
        assert!(text.contains("Grand total"));
        assert!(text.contains("44.95"));
    }

    #[tokio::test]
    async fn delete_refreshes_list() {
        let backend = backend_with_one_sale().await;
        let mut history = SalesHistory::new(backend.clone(), Arc::new(RecordingView::new()));
        history.refresh().await.unwrap();

        history.delete(SaleId::new(1)).await.unwrap();

        assert!(history.sales().is_empty());
        assert_eq!(backend.calls("list_sales"), 2);
    }

    #[tokio::test]
    async fn missing_sale_reports_request_failure() {
        let backend = FakeBackend::with_items(Vec::new());
        let view = Arc::new(RecordingView::new());
        let history = SalesHistory::new(backend, view.clone());

        let err = history.bill(SaleId::new(42)).await.unwrap_err();
        assert_eq!(err.user_message(), "sale not found");
        assert_eq!(
            view.take(),
            [WorkflowNotice::RequestFailed("sale not found".to_string())]
        );
    }
}
