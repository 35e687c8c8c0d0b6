//! Events crossing from runtime tasks into the UI thread.

use shared::protocol::AppState;

#[derive(Debug)]
pub enum UiEvent {
    /// A `state-changed` broadcast, already decoded.
    StateChanged(AppState),
    /// An add intent was rejected; the message is shown to the user.
    AddFailed(String),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::StateChanged(_) => "state_changed",
            UiEvent::AddFailed(_) => "add_failed",
        }
    }
}
