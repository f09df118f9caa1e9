use thiserror::Error;

/// Failure talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response. `message` is the server's `error` field when present.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Text to show the user. Server-reported errors are passed through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
