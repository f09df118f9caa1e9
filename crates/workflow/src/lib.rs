//! `solobill-workflow`
//!
//! **Responsibility:** the controllers between user actions and the backend.
//!
//! - [`OrderWorkflow`]: owns the draft order for one session, stages catalog
//!   selections, and submits the draft to the Sales API.
//! - [`ItemEditor`]: catalog maintenance (create, edit, delete items).
//! - [`SalesHistory`]: committed sales list, details and printable bills.
//! - [`Session`]: wires the three controllers to one backend and one view.
//!
//! Controllers never touch a UI directly. They report what changed through
//! [`WorkflowView::notify`] and leave rendering to the caller.

pub mod error;
pub mod history;
pub mod items;
pub mod notice;
pub mod order;
pub mod session;

#[cfg(test)]
mod fake;

pub use error::WorkflowError;
pub use history::SalesHistory;
pub use items::{ItemEditor, SavedItem};
pub use notice::{RecordingView, WorkflowNotice, WorkflowView};
pub use order::{OrderWorkflow, WorkflowState};
pub use session::Session;
