//! Fire-and-forget dispatch of user intents to the backend.
//!
//! Neither intent touches local state on success; the next `state-changed`
//! broadcast is what makes the change visible.

use std::sync::Arc;

use shared::{domain::ImageId, protocol::BackendCommand};
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, error, warn};

use crate::backend::CommandInvoker;

/// Blocking, user-facing failure notification.
pub trait Notifier: Send + Sync {
    fn notify_failure(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Surface the failure to the user.
    Notify,
    /// Record the failure in the log only.
    LogOnly,
}

#[derive(Clone)]
pub struct CommandGateway {
    invoker: Arc<dyn CommandInvoker>,
    notifier: Arc<dyn Notifier>,
    runtime: Handle,
}

impl CommandGateway {
    pub fn new(
        invoker: Arc<dyn CommandInvoker>,
        notifier: Arc<dyn Notifier>,
        runtime: Handle,
    ) -> Self {
        Self {
            invoker,
            notifier,
            runtime,
        }
    }

    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }

    pub fn request_add(&self, path: impl Into<String>) -> JoinHandle<()> {
        self.dispatch(
            BackendCommand::AddImage {
                filename: path.into(),
            },
            FailurePolicy::Notify,
        )
    }

    pub fn request_remove(&self, id: ImageId) -> JoinHandle<()> {
        self.dispatch(BackendCommand::RemoveImage { id }, FailurePolicy::LogOnly)
    }

    /// Forwards the first dropped path as an add intent. Multi-file drops are
    /// truncated to one file; an empty drop does nothing.
    pub fn request_add_from_drop(&self, paths: &[String]) -> Option<JoinHandle<()>> {
        let Some(first) = paths.first() else {
            debug!("ignoring file drop without paths");
            return None;
        };
        if paths.len() > 1 {
            debug!(
                dropped = paths.len(),
                path = %first,
                "multi-file drop truncated to its first path"
            );
        }
        Some(self.request_add(first.clone()))
    }

    fn dispatch(&self, command: BackendCommand, policy: FailurePolicy) -> JoinHandle<()> {
        let invoker = Arc::clone(&self.invoker);
        let notifier = Arc::clone(&self.notifier);
        let command_name = command.name();
        debug!(command = command_name, "issuing backend intent");

        self.runtime.spawn(async move {
            match invoker.invoke(command).await {
                Ok(()) => debug!(command = command_name, "backend intent accepted"),
                Err(err) => match policy {
                    FailurePolicy::Notify => {
                        warn!(command = command_name, error = %err, "backend intent failed");
                        notifier.notify_failure(&err.to_string());
                    }
                    FailurePolicy::LogOnly => {
                        // Nothing else reports this failure, so it logs at error.
                        error!(command = command_name, error = %err, "backend intent failed");
                    }
                },
            }
        })
    }
}

#[cfg(test)]
#[path = "tests/gateway_tests.rs"]
mod tests;
