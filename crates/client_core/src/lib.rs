//! Presentation-state core for the PNG curator: backend seams, the command
//! gateway, channel subscriptions, the snapshot store and card projection.

use std::sync::Arc;

use shared::protocol::AppState;

pub mod backend;
pub mod error;
pub mod gateway;
pub mod locator;
pub mod store;
pub mod subscriptions;
pub mod view;

pub use backend::{CommandInvoker, EventHandler, EventSource};
pub use error::{CommandError, SubscriptionError};
pub use gateway::{CommandGateway, FailurePolicy, Notifier};
pub use locator::{FileUrlLocator, ResourceLocator};
pub use store::StateStore;
pub use subscriptions::{SubscriptionManager, Teardown};
pub use view::{CardView, FocusController, ListView, PLACEHOLDER_NOTICE};

/// Attaches a view to both backend channels.
///
/// Drops are forwarded through `gateway` as add intents; broadcasts are handed
/// to `on_state`, which is expected to route them to the thread owning the
/// [`StateStore`]. Tear the returned manager down when the view goes away.
pub fn mount_view<F>(
    source: Arc<dyn EventSource>,
    gateway: CommandGateway,
    on_state: F,
) -> SubscriptionManager
where
    F: Fn(AppState) + Send + Sync + 'static,
{
    let mut subscriptions = SubscriptionManager::new(source, gateway.runtime().clone());
    subscriptions.subscribe_drop_events(move |paths| {
        let _ = gateway.request_add_from_drop(&paths);
    });
    subscriptions.subscribe_state_broadcasts(on_state);
    subscriptions
}

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
