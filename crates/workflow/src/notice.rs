//! Render notices emitted by the controllers.

use std::sync::{Arc, Mutex, PoisonError};

use solobill_catalog::CatalogItem;
use solobill_core::ItemId;
use solobill_sales::{CommittedSale, DraftLine, SaleCreated, Totals};

/// Something the UI layer should re-render or tell the user about.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowNotice {
    /// The staged catalog selection changed (`None` when cleared).
    SelectionStaged(Option<CatalogItem>),
    LinesChanged(Vec<DraftLine>),
    TotalsChanged(Totals),
    ValidationFailed(String),
    SubmissionSucceeded(SaleCreated),
    SubmissionFailed(String),
    /// The committed-sales list no longer reflects the server; re-fetch it.
    SalesStale,
    SalesListed(Vec<CommittedSale>),
    CatalogChanged(Vec<CatalogItem>),
    EditModeChanged(Option<ItemId>),
    ItemSaved(String),
    RequestFailed(String),
}

impl WorkflowNotice {
    /// Stable notice name (e.g. "order.lines_changed").
    pub fn kind(&self) -> &'static str {
        match self {
            WorkflowNotice::SelectionStaged(_) => "order.selection_staged",
            WorkflowNotice::LinesChanged(_) => "order.lines_changed",
            WorkflowNotice::TotalsChanged(_) => "order.totals_changed",
            WorkflowNotice::ValidationFailed(_) => "validation_failed",
            WorkflowNotice::SubmissionSucceeded(_) => "order.submission_succeeded",
            WorkflowNotice::SubmissionFailed(_) => "order.submission_failed",
            WorkflowNotice::SalesStale => "sales.stale",
            WorkflowNotice::SalesListed(_) => "sales.listed",
            WorkflowNotice::CatalogChanged(_) => "catalog.changed",
            WorkflowNotice::EditModeChanged(_) => "catalog.edit_mode_changed",
            WorkflowNotice::ItemSaved(_) => "catalog.item_saved",
            WorkflowNotice::RequestFailed(_) => "request_failed",
        }
    }
}

/// Receiver of render notices (the UI layer).
pub trait WorkflowView: Send + Sync {
    fn notify(&self, notice: WorkflowNotice);
}

impl<V: WorkflowView + ?Sized> WorkflowView for Arc<V> {
    fn notify(&self, notice: WorkflowNotice) {
        (**self).notify(notice)
    }
}

/// View that keeps every notice in memory, for tests and headless use.
#[derive(Debug, Default)]
pub struct RecordingView {
    notices: Mutex<Vec<WorkflowNotice>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the notices recorded so far.
    pub fn take(&self) -> Vec<WorkflowNotice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Kinds of the notices recorded so far, without draining them.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(WorkflowNotice::kind)
            .collect()
    }
}

impl WorkflowView for RecordingView {
    fn notify(&self, notice: WorkflowNotice) {
        tracing::trace!(kind = notice.kind(), "notice");
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}
