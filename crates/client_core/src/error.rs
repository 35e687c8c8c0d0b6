use shared::{domain::ListenerId, error::CommandRejected};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CommandError {
    #[error("{0}")]
    Rejected(#[from] CommandRejected),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    #[error("failed to listen on {channel}: {reason}")]
    ListenFailed {
        channel: &'static str,
        reason: String,
    },
    #[error("listener {0} is not registered")]
    UnknownListener(ListenerId),
    #[error("failed to release listener {listener}: {reason}")]
    UnlistenFailed {
        listener: ListenerId,
        reason: String,
    },
}
