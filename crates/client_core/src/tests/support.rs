//! In-memory stand-ins for the backend seams.

use std::{
    collections::HashSet,
    future::Future,
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use shared::{
    domain::ListenerId,
    error::CommandRejected,
    protocol::{BackendCommand, BackendEvent, EventChannel},
};
use tokio::sync::Semaphore;

use crate::{
    backend::{CommandInvoker, EventHandler, EventSource},
    error::{CommandError, SubscriptionError},
    gateway::{CommandGateway, Notifier},
};

pub struct RecordingInvoker {
    commands: Mutex<Vec<BackendCommand>>,
    fail_with: Option<String>,
}

impl RecordingInvoker {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self {
            commands: Mutex::new(Vec::new()),
            fail_with: None,
        })
    }

    pub fn failing(message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            commands: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        })
    }

    pub fn commands(&self) -> Vec<BackendCommand> {
        self.commands.lock().expect("commands").clone()
    }
}

#[async_trait]
impl CommandInvoker for RecordingInvoker {
    async fn invoke(&self, command: BackendCommand) -> Result<(), CommandError> {
        self.commands.lock().expect("commands").push(command);
        match &self.fail_with {
            Some(message) => Err(CommandRejected::new(message.clone()).into()),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("messages").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_failure(&self, message: &str) {
        self.messages
            .lock()
            .expect("messages")
            .push(message.to_string());
    }
}

pub fn gateway_with(
    invoker: Arc<RecordingInvoker>,
    notifier: Arc<RecordingNotifier>,
) -> CommandGateway {
    CommandGateway::new(invoker, notifier, tokio::runtime::Handle::current())
}

/// Event source whose `listen` can be held open until the test releases it.
pub struct ScriptedSource {
    next_id: AtomicU32,
    listeners: Mutex<Vec<(ListenerId, EventChannel, EventHandler)>>,
    unlisten_calls: Mutex<Vec<ListenerId>>,
    failing_unlisten: HashSet<EventChannel>,
    listen_gate: Option<Semaphore>,
}

impl ScriptedSource {
    pub fn immediate() -> Arc<Self> {
        Arc::new(Self::build(None, HashSet::new()))
    }

    pub fn gated() -> Arc<Self> {
        Arc::new(Self::build(Some(Semaphore::new(0)), HashSet::new()))
    }

    pub fn failing_unlisten(channel: EventChannel) -> Arc<Self> {
        Arc::new(Self::build(None, HashSet::from([channel])))
    }

    fn build(listen_gate: Option<Semaphore>, failing_unlisten: HashSet<EventChannel>) -> Self {
        Self {
            next_id: AtomicU32::new(1),
            listeners: Mutex::new(Vec::new()),
            unlisten_calls: Mutex::new(Vec::new()),
            failing_unlisten,
            listen_gate,
        }
    }

    /// Lets `count` pending `listen` calls resolve.
    pub fn open_gate(&self, count: usize) {
        if let Some(gate) = &self.listen_gate {
            gate.add_permits(count);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().expect("listeners").len()
    }

    pub fn unlisten_calls(&self) -> Vec<ListenerId> {
        self.unlisten_calls.lock().expect("unlisten calls").clone()
    }

    pub fn emit(&self, event: BackendEvent) {
        let channel = event.channel();
        let handlers: Vec<EventHandler> = self
            .listeners
            .lock()
            .expect("listeners")
            .iter()
            .filter(|(_, listening_on, _)| *listening_on == channel)
            .map(|(_, _, handler)| Arc::clone(handler))
            .collect();
        for handler in handlers {
            handler(event.clone());
        }
    }
}

#[async_trait]
impl EventSource for ScriptedSource {
    async fn listen(
        &self,
        channel: EventChannel,
        handler: EventHandler,
    ) -> Result<ListenerId, SubscriptionError> {
        if let Some(gate) = &self.listen_gate {
            gate.acquire()
                .await
                .map_err(|err| SubscriptionError::ListenFailed {
                    channel: channel.as_str(),
                    reason: err.to_string(),
                })?
                .forget();
        }
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.listeners
            .lock()
            .expect("listeners")
            .push((id, channel, handler));
        Ok(id)
    }

    async fn unlisten(&self, listener: ListenerId) -> Result<(), SubscriptionError> {
        self.unlisten_calls
            .lock()
            .expect("unlisten calls")
            .push(listener);

        let mut listeners = self.listeners.lock().expect("listeners");
        let Some(index) = listeners.iter().position(|(id, _, _)| *id == listener) else {
            return Err(SubscriptionError::UnknownListener(listener));
        };
        if self.failing_unlisten.contains(&listeners[index].1) {
            return Err(SubscriptionError::UnlistenFailed {
                listener,
                reason: "rejected by source".to_string(),
            });
        }
        listeners.remove(index);
        Ok(())
    }
}

/// Polls `condition` until it holds or a second has passed.
pub async fn eventually(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}

/// Gives spawned tasks a chance to run, then reports whether `condition` stayed false.
pub async fn never(condition: impl Fn() -> bool) -> bool {
    for _ in 0..20 {
        tokio::task::yield_now().await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        if condition() {
            return false;
        }
    }
    true
}

pub async fn within_a_second<T>(future: impl Future<Output = T>) -> T {
    tokio::time::timeout(Duration::from_secs(1), future)
        .await
        .expect("future did not resolve within a second")
}
