use serde::{Deserialize, Serialize};

use crate::domain::{ImageId, Metadata};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    pub filename: String,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Payload of a `state-changed` broadcast, exactly as the backend sends it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateChangedPayload {
    pub images: Vec<ImageRecord>,
    #[serde(default)]
    pub focus_on: u32,
}

/// Rendered truth: the last broadcast, decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub images: Vec<ImageRecord>,
    pub focus_id: Option<ImageId>,
}

impl AppState {
    pub fn is_focused(&self, id: ImageId) -> bool {
        self.focus_id == Some(id)
    }

    pub fn focused_record(&self) -> Option<&ImageRecord> {
        let focus_id = self.focus_id?;
        self.images.iter().find(|image| image.id == focus_id)
    }
}

impl From<StateChangedPayload> for AppState {
    fn from(payload: StateChangedPayload) -> Self {
        let focus = ImageId(payload.focus_on);
        Self {
            images: payload.images,
            focus_id: (!focus.is_none()).then_some(focus),
        }
    }
}

impl From<AppState> for StateChangedPayload {
    fn from(state: AppState) -> Self {
        Self {
            images: state.images,
            focus_on: state.focus_id.unwrap_or(ImageId::NONE).0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventChannel {
    FileDrop,
    StateChanged,
}

impl EventChannel {
    pub fn as_str(self) -> &'static str {
        match self {
            EventChannel::FileDrop => "file-drop",
            EventChannel::StateChanged => "state-changed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum BackendEvent {
    FileDrop(Vec<String>),
    StateChanged(StateChangedPayload),
}

impl BackendEvent {
    pub fn channel(&self) -> EventChannel {
        match self {
            BackendEvent::FileDrop(_) => EventChannel::FileDrop,
            BackendEvent::StateChanged(_) => EventChannel::StateChanged,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum BackendCommand {
    AddImage { filename: String },
    RemoveImage { id: ImageId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::AddImage { .. } => "add_image",
            BackendCommand::RemoveImage { .. } => "remove_image",
        }
    }
}
