use thiserror::Error;

use solobill_client::ClientError;
use solobill_core::DomainError;

pub const NO_ITEM_SELECTED: &str = "no item selected";
pub const ITEM_NOT_FOUND: &str = "item not found";
pub const LINE_NOT_FOUND: &str = "line not found";

/// Failure of a controller operation.
///
/// Every variant leaves the controller usable; the user corrects the input
/// and tries again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Rejected before any network call.
    #[error("{0}")]
    Validation(String),

    /// A submission is pending; the draft is locked until it resolves.
    #[error("a submission is already in progress")]
    SubmissionInFlight,

    #[error("no submission is in progress")]
    NoSubmissionInFlight,

    /// The backend call failed (transport or server-reported).
    #[error(transparent)]
    Request(#[from] ClientError),
}

impl WorkflowError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Text to show the user.
    pub fn user_message(&self) -> String {
        match self {
            WorkflowError::Request(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

impl From<DomainError> for WorkflowError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.user_message())
    }
}
