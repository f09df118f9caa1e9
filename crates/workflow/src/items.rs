//! Catalog maintenance: list, create, edit and delete items.

use chrono::Utc;

use solobill_catalog::{CatalogSnapshot, ItemDraft};
use solobill_client::{ClientError, ItemCatalogApi};
use solobill_core::ItemId;

use crate::error::{ITEM_NOT_FOUND, WorkflowError};
use crate::notice::{WorkflowNotice, WorkflowView};

/// Outcome of [`ItemEditor::save`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SavedItem {
    Created(ItemId),
    Updated(ItemId),
}

/// Item form controller.
///
/// The form is in create mode unless `editing` names the item being updated.
pub struct ItemEditor<A, V> {
    api: A,
    view: V,
    snapshot: CatalogSnapshot,
    editing: Option<ItemId>,
}

impl<A, V> ItemEditor<A, V>
where
    A: ItemCatalogApi,
    V: WorkflowView,
{
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            snapshot: CatalogSnapshot::empty(),
            editing: None,
        }
    }

    /// Catalog as of the last successful refresh.
    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }

    pub async fn refresh(&mut self) -> Result<&CatalogSnapshot, WorkflowError> {
        let items = match self.api.list_items().await {
            Ok(items) => items,
            Err(err) => return Err(self.request_failed(err)),
        };
        tracing::debug!(count = items.len(), "catalog refreshed");

        self.view
            .notify(WorkflowNotice::CatalogChanged(items.clone()));
        self.snapshot = CatalogSnapshot::new(items, Utc::now());
        Ok(&self.snapshot)
    }

    /// Switch the form to edit `id`; returns the prefilled form values.
    pub fn begin_edit(&mut self, id: ItemId) -> Result<ItemDraft, WorkflowError> {
        let Some(item) = self.snapshot.get(id) else {
            let message = ITEM_NOT_FOUND.to_string();
            self.view
                .notify(WorkflowNotice::ValidationFailed(message.clone()));
            return Err(WorkflowError::Validation(message));
        };
        let draft = ItemDraft::from_item(item);

        self.editing = Some(id);
        self.view.notify(WorkflowNotice::EditModeChanged(Some(id)));
        Ok(draft)
    }

    pub fn cancel_edit(&mut self) {
        if self.editing.take().is_some() {
            self.view.notify(WorkflowNotice::EditModeChanged(None));
        }
    }

    /// Submit the item form: create in create mode, update in edit mode.
    ///
    /// On failure the form stays in its current mode so the user can fix the
    /// input and resubmit. On success the form returns to create mode and the
    /// catalog is re-fetched.
    pub async fn save(
        &mut self,
        name: &str,
        cost_price: &str,
        sell_price: &str,
    ) -> Result<SavedItem, WorkflowError> {
        let draft = match ItemDraft::parse(name, cost_price, sell_price) {
            Ok(draft) => draft,
            Err(err) => {
                let err = WorkflowError::from(err);
                self.view
                    .notify(WorkflowNotice::ValidationFailed(err.user_message()));
                return Err(err);
            }
        };

        let (saved, message) = match self.editing {
            Some(id) => match self.api.update_item(id, &draft).await {
                Ok(()) => (SavedItem::Updated(id), "Item updated successfully".to_string()),
                Err(err) => return Err(self.request_failed(err)),
            },
            None => match self.api.create_item(&draft).await {
                Ok(created) => {
                    let message = if created.message.is_empty() {
                        "Item added successfully".to_string()
                    } else {
                        created.message
                    };
                    (SavedItem::Created(created.item_id), message)
                }
                Err(err) => return Err(self.request_failed(err)),
            },
        };
        tracing::info!(?saved, name = draft.name(), "item saved");

        self.cancel_edit();
        self.view.notify(WorkflowNotice::ItemSaved(message));
        if let Err(err) = self.refresh().await {
            tracing::warn!(error = %err, "catalog refresh after save failed");
        }
        Ok(saved)
    }

    pub async fn delete(&mut self, id: ItemId) -> Result<(), WorkflowError> {
        if self.editing == Some(id) {
            self.cancel_edit();
        }
        if let Err(err) = self.api.delete_item(id).await {
            return Err(self.request_failed(err));
        }
        tracing::info!(item_id = %id, "item deleted");

        if let Err(err) = self.refresh().await {
            tracing::warn!(error = %err, "catalog refresh after delete failed");
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

    use solobill_core::Money;

    use super::*;
    use crate::fake::{FakeBackend, gadget, widget};
    use crate::notice::RecordingView;

    fn setup() -> (
        ItemEditor<Arc<FakeBackend>, Arc<RecordingView>>,
        Arc<FakeBackend>,
        Arc<RecordingView>,
    ) {
        let backend = FakeBackend::with_items(vec![widget(), gadget()]);
        let view = Arc::new(RecordingView::new());
        (ItemEditor::new(backend.clone(), view.clone()), backend, view)
    }

    #[tokio::test]
    async fn refresh_replaces_snapshot() {
        let (mut editor, _, view) = setup();
        assert!(editor.snapshot().is_empty());

        let snapshot = editor.refresh().await.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(view.kinds(), ["catalog.changed"]);
    }

    #[tokio::test]
    async fn save_in_create_mode_creates_and_refreshes() {
        let (mut editor, backend, view) = setup();

        let saved = editor.save("Bolt", "0.10", "0.25").await.unwrap();

        assert_eq!(saved, SavedItem::Created(ItemId::new(3)));
        assert_eq!(editor.snapshot().len(), 3);
        assert_eq!(backend.calls("list_items"), 1);
        assert!(view.take().contains(&WorkflowNotice::ItemSaved(
            "Item added successfully".to_string()
        )));
    }

    #[tokio::test]
    async fn edit_mode_updates_existing_item() {
        let (mut editor, _, view) = setup();
        editor.refresh().await.unwrap();

        let form = editor.begin_edit(ItemId::new(1)).unwrap();
        assert_eq!(form.name(), "Widget");
        assert_eq!(editor.editing(), Some(ItemId::new(1)));

        let saved = editor.save("Widget", "8.00", "10.50").await.unwrap();

        assert_eq!(saved, SavedItem::Updated(ItemId::new(1)));
        assert_eq!(editor.editing(), None);
        let item = editor.snapshot().get(ItemId::new(1)).unwrap();
        assert_eq!(item.sell_price, Money::from_cents(1050));
        assert!(view
            .take()
            .contains(&WorkflowNotice::EditModeChanged(None)));
    }

    #[tokio::test]
    async fn invalid_form_makes_no_call() {
        let (mut editor, backend, view) = setup();

        let err = editor.save("", "1", "2").await.unwrap_err();

        assert_eq!(err, WorkflowError::validation("item name required"));
        assert_eq!(backend.calls("create_item"), 0);
        assert_eq!(
            view.take(),
            [WorkflowNotice::ValidationFailed("item name required".to_string())]
        );
    }

    #[tokio::test]
    async fn duplicate_name_surfaces_server_error_and_keeps_mode() {
        let (mut editor, _, view) = setup();
        editor.refresh().await.unwrap();
        editor.begin_edit(ItemId::new(2)).unwrap();
        view.take();

        // Switching back to create mode and reusing an existing name.
        editor.cancel_edit();
        let err = editor.save("Widget", "1", "2").await.unwrap_err();

        assert_eq!(err.user_message(), "item name already exists");
        assert!(view.take().contains(&WorkflowNotice::RequestFailed(
            "item name already exists".to_string()
        )));
        assert_eq!(editor.editing(), None);
    }

    #[tokio::test]
    async fn failed_update_stays_in_edit_mode() {
        let (mut editor, backend, _) = setup();
        editor.refresh().await.unwrap();
        editor.begin_edit(ItemId::new(1)).unwrap();

        backend.fail_next(ClientError::Network("connection reset".to_string()));
        editor.save("Widget", "8", "9").await.unwrap_err();

        assert_eq!(editor.editing(), Some(ItemId::new(1)));
    }

    #[tokio::test]
    async fn begin_edit_unknown_item_fails() {
        let (mut editor, _, _) = setup();
        let err = editor.begin_edit(ItemId::new(1)).unwrap_err();
        assert_eq!(err, WorkflowError::validation(ITEM_NOT_FOUND));
        assert_eq!(editor.editing(), None);
    }

    #[tokio::test]
    async fn deleting_edited_item_leaves_edit_mode() {
        let (mut editor, _, _) = setup();
        editor.refresh().await.unwrap();
        editor.begin_edit(ItemId::new(2)).unwrap();

        editor.delete(ItemId::new(2)).await.unwrap();

        assert_eq!(editor.editing(), None);
        assert!(!editor.snapshot().contains(ItemId::new(2)));
    }
}
