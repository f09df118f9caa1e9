//! Order workflow controller.
//!
//! Owns the single draft order of a session and turns user actions into draft
//! mutations, render notices and, on submit, one call to the Sales API.
//!
//! State machine:
//!
//! ```text
//! Empty --add--> Building --submit--> Submitting --ok--> Empty
//!                   ^                      |
//!                   +-------- error -------+
//! ```
//!
//! While `Submitting`, the draft is locked: a second submit and every draft
//! mutation is rejected with [`WorkflowError::SubmissionInFlight`].

use solobill_catalog::{CatalogItem, CatalogSnapshot};
use solobill_client::{ClientError, SalesApi};
use solobill_core::{ItemId, Money};
use solobill_sales::{DraftLine, DraftOrder, Quantity, SaleCreated, SalePayload};

use crate::error::{ITEM_NOT_FOUND, LINE_NOT_FOUND, NO_ITEM_SELECTED, WorkflowError};
use crate::notice::{WorkflowNotice, WorkflowView};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    /// No lines on the draft.
    Empty,
    /// At least one line, not submitted.
    Building,
    /// Submission sent, waiting for the server.
    Submitting,
}

pub struct OrderWorkflow<A, V> {
    api: A,
    view: V,
    draft: DraftOrder,
    staged: Option<CatalogItem>,
    state: WorkflowState,
}

impl<A, V> OrderWorkflow<A, V>
where
    A: SalesApi,
    V: WorkflowView,
{
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            draft: DraftOrder::new(),
            staged: None,
            state: WorkflowState::Empty,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn draft(&self) -> &DraftOrder {
        &self.draft
    }

    /// Item selected in the catalog picker but not yet added to the draft.
    pub fn staged(&self) -> Option<&CatalogItem> {
        self.staged.as_ref()
    }

    /// Stage `item_id` from the latest catalog snapshot so its price can be
    /// shown before it is added.
    pub fn select_item(
        &mut self,
        catalog: &CatalogSnapshot,
        item_id: ItemId,
    ) -> Result<&CatalogItem, WorkflowError> {
        let Some(item) = catalog.get(item_id) else {
            self.staged = None;
            self.view.notify(WorkflowNotice::SelectionStaged(None));
            return Err(self.reject(ITEM_NOT_FOUND));
        };

        self.view
            .notify(WorkflowNotice::SelectionStaged(Some(item.clone())));
        Ok(&*self.staged.insert(item.clone()))
    }

    pub fn clear_selection(&mut self) {
        if self.staged.take().is_some() {
            self.view.notify(WorkflowNotice::SelectionStaged(None));
        }
    }

    /// Add the staged item to the draft. Missing or invalid quantities count
    /// as one unit. Returns the index of the affected line.
    pub fn commit_selection(&mut self, raw_quantity: &str) -> Result<usize, WorkflowError> {
        self.ensure_unlocked()?;
        let Some(item) = self.staged.take() else {
            return Err(self.reject(NO_ITEM_SELECTED));
        };

        let quantity = Quantity::coerce(raw_quantity);
        let index = self.draft.add_line(&item, quantity);
        tracing::debug!(
            draft_id = %self.draft.id(),
            item_id = %item.id,
            quantity = quantity.get(),
            "line added"
        );

        self.view.notify(WorkflowNotice::SelectionStaged(None));
        self.settle();
        self.publish_draft();
        Ok(index)
    }

    /// Change the quantity of the line at `index`.
    ///
    /// Non-numeric or non-positive input keeps the current quantity and
    /// returns `Ok(false)`; the line list is re-published either way so the
    /// input field shows the quantity actually in effect.
    pub fn change_quantity(&mut self, index: usize, raw_quantity: &str) -> Result<bool, WorkflowError> {
        self.ensure_unlocked()?;
        if self.draft.line(index).is_none() {
            return Err(self.reject(LINE_NOT_FOUND));
        }

        let changed = match Quantity::parse(raw_quantity) {
            Some(quantity) => {
                self.draft.update_line_quantity(index, quantity)?;
                true
            }
            None => false,
        };
        self.publish_draft();
        Ok(changed)
    }

    pub fn remove_line(&mut self, index: usize) -> Result<DraftLine, WorkflowError> {
        self.ensure_unlocked()?;
        let removed = match self.draft.remove_line(index) {
            Ok(line) => line,
            Err(_) => return Err(self.reject(LINE_NOT_FOUND)),
        };

        self.settle();
        self.publish_draft();
        Ok(removed)
    }

    /// Set the discount from user text. Unparseable or negative input is
    /// stored as zero. Returns the discount in effect.
    pub fn apply_discount(&mut self, raw_amount: &str) -> Result<Money, WorkflowError> {
        self.ensure_unlocked()?;
        self.draft.set_discount(Money::parse_or_zero(raw_amount));
        self.view
            .notify(WorkflowNotice::TotalsChanged(self.draft.totals()));
        Ok(self.draft.discount())
    }

    /// Drop the draft and the staged selection.
    pub fn abandon(&mut self) -> Result<(), WorkflowError> {
        self.ensure_unlocked()?;
        self.draft.reset();
        self.clear_selection();
        self.settle();
        self.publish_draft();
        Ok(())
    }

    /// Validate the draft and lock it for submission.
    ///
    /// Validation failures are reported synchronously and leave the draft
    /// untouched. On success the workflow is `Submitting` until
    /// [`OrderWorkflow::complete_submission`] is called.
    pub fn begin_submission(&mut self, customer_name: &str) -> Result<SalePayload, WorkflowError> {
        self.ensure_unlocked()?;
        let payload = match self.draft.to_payload(customer_name) {
            Ok(payload) => payload,
            Err(err) => return Err(self.reject(err.user_message())),
        };

        self.state = WorkflowState::Submitting;
        tracing::info!(
            draft_id = %self.draft.id(),
            lines = payload.items.len(),
            grand_total = %payload.grand_total,
            "submitting draft order"
        );
        Ok(payload)
    }

    /// Resolve a pending submission with the Sales API outcome.
    ///
    /// On success the draft is reset and the caller is told the sales list is
    /// stale. On failure the draft is kept as it was and the server's message
    /// is surfaced.
    pub fn complete_submission(
        &mut self,
        outcome: Result<SaleCreated, ClientError>,
    ) -> Result<SaleCreated, WorkflowError> {
        if self.state != WorkflowState::Submitting {
            return Err(WorkflowError::NoSubmissionInFlight);
        }

        match outcome {
            Ok(created) => {
                tracing::info!(
                    draft_id = %self.draft.id(),
                    selling_id = %created.selling_id,
                    "sale created"
                );
                self.draft.reset();
                self.state = WorkflowState::Empty;
                self.view
                    .notify(WorkflowNotice::SubmissionSucceeded(created.clone()));
                self.view.notify(WorkflowNotice::SalesStale);
                self.publish_draft();
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(draft_id = %self.draft.id(), error = %err, "sale submission failed");
                self.state = WorkflowState::Building;
                self.settle();
                self.view
                    .notify(WorkflowNotice::SubmissionFailed(err.user_message()));
                Err(WorkflowError::Request(err))
            }
        }
    }

    /// Validate, send and resolve the draft in one step. Single attempt, no retry.
    ///
    /// If this future is dropped before the Sales API answers (a timeout or
    /// `select!` around it), the workflow stays `Submitting`. Resolve it with
    /// [`OrderWorkflow::complete_submission`], passing the error that ended the
    /// wait, to unlock the draft.
    pub async fn submit(&mut self, customer_name: &str) -> Result<SaleCreated, WorkflowError> {
        let payload = self.begin_submission(customer_name)?;
        let outcome = self.api.create_sale(&payload).await;
        self.complete_submission(outcome)
    }

    fn ensure_unlocked(&self) -> Result<(), WorkflowError> {
        if self.state == WorkflowState::Submitting {
            let err = WorkflowError::SubmissionInFlight;
            self.view
                .notify(WorkflowNotice::ValidationFailed(err.to_string()));
            return Err(err);
        }
        Ok(())
    }

    fn reject(&self, message: impl Into<String>) -> WorkflowError {
        let message = message.into();
        self.view
            .notify(WorkflowNotice::ValidationFailed(message.clone()));
        WorkflowError::Validation(message)
    }

    fn settle(&mut self) {
        if self.state == WorkflowState::Submitting {
            return;
        }
        self.state = if self.draft.is_empty() {
            WorkflowState::Empty
        } else {
            WorkflowState::Building
        };
    }

    fn publish_draft(&self) {
        self.view
            .notify(WorkflowNotice::LinesChanged(self.draft.lines().to_vec()));
        self.view
            .notify(WorkflowNotice::TotalsChanged(self.draft.totals()));
    }
}
