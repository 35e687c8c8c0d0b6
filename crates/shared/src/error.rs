use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque failure returned by a backend command.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct CommandRejected {
    pub message: String,
}

impl CommandRejected {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
