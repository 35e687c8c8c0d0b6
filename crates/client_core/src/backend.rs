//! Seams between the presentation core and whatever process owns the image collection.

use std::sync::Arc;

use async_trait::async_trait;
use shared::{
    domain::ListenerId,
    protocol::{BackendCommand, BackendEvent, EventChannel},
};

use crate::error::{CommandError, SubscriptionError};

pub type EventHandler = Arc<dyn Fn(BackendEvent) + Send + Sync>;

#[async_trait]
pub trait CommandInvoker: Send + Sync {
    async fn invoke(&self, command: BackendCommand) -> Result<(), CommandError>;
}

/// Backend-pushed event channels. Attaching and releasing are both asynchronous.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn listen(
        &self,
        channel: EventChannel,
        handler: EventHandler,
    ) -> Result<ListenerId, SubscriptionError>;

    async fn unlisten(&self, listener: ListenerId) -> Result<(), SubscriptionError>;
}
