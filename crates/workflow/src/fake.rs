//! In-memory backend used by the controller tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use solobill_catalog::{CatalogItem, ItemCreated, ItemDraft};
use solobill_client::{ClientError, ItemCatalogApi, SalesApi};
use solobill_core::{ItemId, Money, SaleId};
use solobill_sales::{
    CommittedSale, SaleCreated, SaleDetailLine, SaleDetails, SalePayload,
};

#[derive(Debug, Default)]
pub(crate) struct FakeState {
    pub items: Vec<CatalogItem>,
    pub sales: Vec<CommittedSale>,
    pub submitted: Vec<(SaleId, SalePayload)>,
    pub calls: Vec<&'static str>,
    pub fail_next: Option<ClientError>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    state: Mutex<FakeState>,
}

impl FakeBackend {
    pub fn with_items(items: Vec<CatalogItem>) -> Arc<Self> {
        let backend = Self::default();
        backend.state().items = items;
        Arc::new(backend)
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn fail_next(&self, err: ClientError) {
        self.state().fail_next = Some(err);
    }

    pub fn calls(&self, name: &str) -> usize {
        self.state().calls.iter().filter(|c| **c == name).count()
    }

    fn begin(&self, call: &'static str) -> Result<MutexGuard<'_, FakeState>, ClientError> {
        let mut state = self.state();
        state.calls.push(call);
        match state.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }
}

pub(crate) fn widget() -> CatalogItem {
    CatalogItem::new(ItemId::new(1), "Widget", Money::from_cents(800), Money::from_cents(999))
}

pub(crate) fn gadget() -> CatalogItem {
    CatalogItem::new(ItemId::new(2), "Gadget", Money::from_cents(1000), Money::from_cents(1250))
}

fn not_found(what: &str) -> ClientError {
    ClientError::Api {
        status: 404,
        message: format!("{what} not found"),
    }
}

#[async_trait]
impl ItemCatalogApi for FakeBackend {
    async fn list_items(&self) -> Result<Vec<CatalogItem>, ClientError> {
        Ok(self.begin("list_items")?.items.clone())
    }

    async fn create_item(&self, draft: &ItemDraft) -> Result<ItemCreated, ClientError> {
        let mut state = self.begin("create_item")?;
        if state.items.iter().any(|i| i.name == draft.name()) {
            return Err(ClientError::Api {
                status: 409,
                message: "item name already exists".to_string(),
            });
        }
        let next = state.items.iter().map(|i| i.id.get()).max().unwrap_or(0) + 1;
        let id = ItemId::new(next);
        state.items.push(CatalogItem::new(
            id,
            draft.name(),
            draft.cost_price(),
            draft.sell_price(),
        ));
        Ok(ItemCreated {
            item_id: id,
            message: "Item added successfully".to_string(),
        })
    }

    async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> Result<(), ClientError> {
        let mut state = self.begin("update_item")?;
        let item = state
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| not_found("item"))?;
        item.name = draft.name().to_string();
        item.cost_price = draft.cost_price();
        item.sell_price = draft.sell_price();
        Ok(())
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), ClientError> {
        let mut state = self.begin("delete_item")?;
        state.items.retain(|i| i.id != id);
        Ok(())
    }
}

#[async_trait]
impl SalesApi for FakeBackend {
    async fn list_sales(&self) -> Result<Vec<CommittedSale>, ClientError> {
        Ok(self.begin("list_sales")?.sales.clone())
    }

    async fn create_sale(&self, payload: &SalePayload) -> Result<SaleCreated, ClientError> {
        let mut state = self.begin("create_sale")?;
        let id = SaleId::new(state.submitted.len() as i64 + 1);
        state.sales.insert(
            0,
            CommittedSale {
                id,
                customer_name: payload.customer_name.clone(),
                items_count: payload.items.len() as u32,
                total_amount: payload.total_amount,
                discount: payload.discount,
                grand_total: payload.grand_total,
                created_at: None,
            },
        );
        state.submitted.push((id, payload.clone()));
        Ok(SaleCreated {
            selling_id: id,
            message: "Order created successfully".to_string(),
        })
    }

    async fn sale_details(&self, id: SaleId) -> Result<SaleDetails, ClientError> {
        let state = self.begin("sale_details")?;
        let order = state
            .sales
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| not_found("sale"))?;
        let items = state
            .submitted
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, payload)| {
                payload
                    .items
                    .iter()
                    .map(|line| SaleDetailLine {
                        item_id: line.item_id,
                        item_name: line.item_name.clone(),
                        quantity: line.quantity,
                        unit_price: line.unit_price,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(SaleDetails { order, items })
    }

    async fn delete_sale(&self, id: SaleId) -> Result<(), ClientError> {
        let mut state = self.begin("delete_sale")?;
        let before = state.sales.len();
        state.sales.retain(|s| s.id != id);
        if state.sales.len() == before {
            return Err(not_found("sale"));
        }
        Ok(())
    }
}
