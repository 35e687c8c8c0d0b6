//! In-process image backend: owns the collection, answers `add_image` /
//! `remove_image`, and pushes `file-drop` and `state-changed` events to
//! whoever listens.

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};

use async_trait::async_trait;
use client_core::{
    CommandError, CommandInvoker, EventHandler, EventSource, SubscriptionError,
};
use shared::{
    domain::{ImageId, ListenerId},
    error::CommandRejected,
    protocol::{BackendCommand, BackendEvent, EventChannel},
};
use thiserror::Error;
use tracing::{debug, info};

mod collection;
mod metadata;

pub use collection::ImageCollection;
pub use metadata::{parse_png_metadata, read_png_metadata};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Not a PNG file: {0}")]
    NotPng(String),
    /// Unreadable file or malformed PNG stream.
    #[error("Failed to open PNG: {0}")]
    Decode(String),
}

impl From<BackendError> for CommandError {
    fn from(err: BackendError) -> Self {
        CommandError::Rejected(CommandRejected::new(err.to_string()))
    }
}

struct Listener {
    id: ListenerId,
    channel: EventChannel,
    handler: EventHandler,
}

pub struct LocalBackend {
    collection: tokio::sync::Mutex<ImageCollection>,
    listeners: Mutex<Vec<Listener>>,
    next_listener: AtomicU32,
}

impl Default for LocalBackend {
    fn default() -> Self {
        Self {
            collection: tokio::sync::Mutex::new(ImageCollection::new()),
            listeners: Mutex::new(Vec::new()),
            next_listener: AtomicU32::new(1),
        }
    }
}

impl LocalBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<Listener>> {
        // Handlers run outside the lock, so a poisoned registry is still consistent.
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn listener_count(&self, channel: EventChannel) -> usize {
        self.listeners()
            .iter()
            .filter(|listener| listener.channel == channel)
            .count()
    }

    /// Delivers `event` to every listener on its channel, in registration order.
    pub fn emit(&self, event: BackendEvent) {
        let channel = event.channel();
        let handlers: Vec<EventHandler> = self
            .listeners()
            .iter()
            .filter(|listener| listener.channel == channel)
            .map(|listener| Arc::clone(&listener.handler))
            .collect();
        debug!(
            channel = channel.as_str(),
            listeners = handlers.len(),
            "emit"
        );
        for handler in handlers {
            handler(event.clone());
        }
    }

    /// Entry point for native drag-and-drop.
    pub fn emit_file_drop(&self, paths: Vec<String>) {
        self.emit(BackendEvent::FileDrop(paths));
    }

    pub async fn add_image(&self, filename: &str) -> Result<ImageId, BackendError> {
        let metadata = read_png_metadata(filename).await?;
        let mut collection = self.collection.lock().await;
        let id = collection.insert(filename, metadata);
        info!(%id, filename, images = collection.len(), "image added");
        self.emit(BackendEvent::StateChanged(collection.snapshot()));
        Ok(id)
    }

    pub async fn remove_image(&self, id: ImageId) {
        let mut collection = self.collection.lock().await;
        if collection.remove(id) {
            info!(%id, images = collection.len(), "image removed");
        } else {
            debug!(%id, "remove requested for unknown image");
        }
        self.emit(BackendEvent::StateChanged(collection.snapshot()));
    }
}

#[async_trait]
impl CommandInvoker for LocalBackend {
    async fn invoke(&self, command: BackendCommand) -> Result<(), CommandError> {
        match command {
            BackendCommand::AddImage { filename } => {
                self.add_image(&filename).await?;
            }
            BackendCommand::RemoveImage { id } => self.remove_image(id).await,
        }
        Ok(())
    }
}

#[async_trait]
impl EventSource for LocalBackend {
    async fn listen(
        &self,
        channel: EventChannel,
        handler: EventHandler,
    ) -> Result<ListenerId, SubscriptionError> {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        self.listeners().push(Listener {
            id,
            channel,
            handler,
        });
        debug!(channel = channel.as_str(), listener = %id, "listener registered");
        Ok(id)
    }

    async fn unlisten(&self, listener: ListenerId) -> Result<(), SubscriptionError> {
        let mut listeners = self.listeners();
        let Some(index) = listeners.iter().position(|entry| entry.id == listener) else {
            return Err(SubscriptionError::UnknownListener(listener));
        };
        let removed = listeners.remove(index);
        debug!(channel = removed.channel.as_str(), %listener, "listener released");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
