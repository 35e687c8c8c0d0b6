//! Projection of the current snapshot into card views, plus the focus-scroll
//! bookkeeping the renderer consults while laying cards out.

use shared::{
    domain::{ImageId, Metadata},
    protocol::AppState,
};
use tokio::task::JoinHandle;

use crate::{gateway::CommandGateway, locator::ResourceLocator, store::StateStore};

pub const PLACEHOLDER_NOTICE: &str = "Drag and drop PNG files here!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Stable identity; widget state for the card is keyed by it.
    pub key: ImageId,
    /// Resolved locator for the image surface.
    pub source: String,
    /// Raw filename, shown as caption text only.
    pub caption: String,
    pub metadata: Metadata,
    pub is_focused: bool,
}

impl CardView {
    /// Close affordance: one remove intent per activation.
    pub fn activate_close(&self, gateway: &CommandGateway) -> JoinHandle<()> {
        gateway.request_remove(self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Placeholder,
    Cards(Vec<CardView>),
}

impl ListView {
    pub fn project(state: &AppState, locator: &dyn ResourceLocator) -> Self {
        if state.images.is_empty() {
            return ListView::Placeholder;
        }

        let cards = state
            .images
            .iter()
            .map(|image| CardView {
                key: image.id,
                source: locator.locate(&image.filename),
                caption: image.filename.clone(),
                metadata: image.metadata.clone(),
                is_focused: state.is_focused(image.id),
            })
            .collect();
        ListView::Cards(cards)
    }

    pub fn cards(&self) -> &[CardView] {
        match self {
            ListView::Placeholder => &[],
            ListView::Cards(cards) => cards,
        }
    }

    pub fn keys(&self) -> Vec<ImageId> {
        self.cards().iter().map(|card| card.key).collect()
    }
}

/// Decides when a focused card scrolls itself into view.
///
/// The scroll is re-armed on every store replacement, so each broadcast that
/// names a focus target re-affirms it even if the id did not change. Frames
/// drawn without a new broadcast never scroll. An armed card keeps scrolling
/// until [`FocusController::settle`] reports its final layout, since a card
/// still showing its loading spinner is shorter than the finished one.
#[derive(Debug, Default)]
pub struct FocusController {
    observed_revision: u64,
    armed: Option<ImageId>,
}

impl FocusController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per frame before cards are laid out.
    pub fn observe(&mut self, store: &StateStore) {
        if store.revision() == self.observed_revision {
            return;
        }
        self.observed_revision = store.revision();
        self.armed = store.state().focused_record().map(|image| image.id);
    }

    /// True for the focused card while the current revision is armed.
    pub fn should_scroll(&self, card: &CardView) -> bool {
        card.is_focused && self.armed == Some(card.key)
    }

    /// Disarms once `key` has been laid out at its final size.
    pub fn settle(&mut self, key: ImageId) {
        if self.armed == Some(key) {
            self.armed = None;
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
