use crate::events::EventList;

/// Boxed error returned by a [`Transport`](crate::Transport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum HooksError {
    #[error("Your {list} array contains an unauthorized event: {event}")]
    UnauthorizedEvent { list: EventList, event: String },

    #[error("unexpected status {status} (expected {expected}): {message}")]
    UnexpectedStatus {
        status: u16,
        expected: u16,
        message: String,
    },

    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
