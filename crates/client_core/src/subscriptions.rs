//! Attach/detach of the two backend-pushed channels for one mounted view.
//!
//! `listen` resolves asynchronously, so each subscription keeps the join
//! handle of its pending attach. Teardown waits for that attach to resolve and
//! then releases the listener it produced.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use futures::future::join_all;
use shared::{
    domain::ListenerId,
    protocol::{AppState, BackendEvent, EventChannel},
};
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, warn};

use crate::{
    backend::{EventHandler, EventSource},
    error::SubscriptionError,
};

struct Subscription {
    channel: EventChannel,
    active: Arc<AtomicBool>,
    attach: JoinHandle<Result<ListenerId, SubscriptionError>>,
}

pub struct SubscriptionManager {
    source: Arc<dyn EventSource>,
    runtime: Handle,
    subscriptions: Vec<Subscription>,
}

/// Outstanding releases started by [`SubscriptionManager::teardown`].
#[must_use = "dropping a Teardown detaches the releases; they still run"]
pub struct Teardown {
    releases: Vec<JoinHandle<()>>,
}

impl Teardown {
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// Resolves once every release has finished, successfully or not.
    pub async fn finished(self) {
        for result in join_all(self.releases).await {
            if let Err(err) = result {
                warn!(error = %err, "listener release task did not complete");
            }
        }
    }
}

impl SubscriptionManager {
    pub fn new(source: Arc<dyn EventSource>, runtime: Handle) -> Self {
        Self {
            source,
            runtime,
            subscriptions: Vec::new(),
        }
    }

    pub fn is_subscribed(&self, channel: EventChannel) -> bool {
        self.subscriptions.iter().any(|sub| sub.channel == channel)
    }

    pub fn subscribe_drop_events<F>(&mut self, handler: F)
    where
        F: Fn(Vec<String>) + Send + Sync + 'static,
    {
        self.subscribe(EventChannel::FileDrop, move |event| match event {
            BackendEvent::FileDrop(paths) => handler(paths),
            other => warn!(channel = ?other.channel(), "unexpected event on file-drop channel"),
        });
    }

    pub fn subscribe_state_broadcasts<F>(&mut self, handler: F)
    where
        F: Fn(AppState) + Send + Sync + 'static,
    {
        self.subscribe(EventChannel::StateChanged, move |event| match event {
            BackendEvent::StateChanged(payload) => handler(AppState::from(payload)),
            other => warn!(channel = ?other.channel(), "unexpected event on state-changed channel"),
        });
    }

    fn subscribe<F>(&mut self, channel: EventChannel, handler: F)
    where
        F: Fn(BackendEvent) + Send + Sync + 'static,
    {
        if self.is_subscribed(channel) {
            warn!(channel = channel.as_str(), "channel already subscribed for this view");
            return;
        }

        debug!(channel = channel.as_str(), "listen");
        let active = Arc::new(AtomicBool::new(true));
        let gate = Arc::clone(&active);
        let gated: EventHandler = Arc::new(move |event: BackendEvent| {
            if gate.load(Ordering::Acquire) {
                handler(event);
            }
        });

        let source = Arc::clone(&self.source);
        let attach = self
            .runtime
            .spawn(async move { source.listen(channel, gated).await });

        self.subscriptions.push(Subscription {
            channel,
            active,
            attach,
        });
    }

    /// Releases every subscription exactly once. Delivery to this view stops
    /// immediately; the backend listener is released once its attach resolves.
    pub fn teardown(&mut self) -> Teardown {
        let releases = self
            .subscriptions
            .drain(..)
            .map(|sub| {
                sub.active.store(false, Ordering::Release);
                let source = Arc::clone(&self.source);
                self.runtime
                    .spawn(release(source, sub.channel, sub.attach))
            })
            .collect();
        Teardown { releases }
    }
}

impl Drop for SubscriptionManager {
    fn drop(&mut self) {
        if !self.subscriptions.is_empty() {
            // Releases keep running on the runtime after the manager is gone.
            let _ = self.teardown();
        }
    }
}

async fn release(
    source: Arc<dyn EventSource>,
    channel: EventChannel,
    attach: JoinHandle<Result<ListenerId, SubscriptionError>>,
) {
    let listener = match attach.await {
        Ok(Ok(listener)) => listener,
        Ok(Err(err)) => {
            warn!(channel = channel.as_str(), error = %err, "listen never attached; nothing to release");
            return;
        }
        Err(err) => {
            warn!(channel = channel.as_str(), error = %err, "listen task did not complete");
            return;
        }
    };

    match source.unlisten(listener).await {
        Ok(()) => debug!(channel = channel.as_str(), %listener, "unlisten"),
        Err(err) => warn!(channel = channel.as_str(), %listener, error = %err, "unlisten failed"),
    }
}

#[cfg(test)]
#[path = "tests/subscriptions_tests.rs"]
mod tests;
