//! UI event intake fed from runtime tasks.

use client_core::Notifier;
use crossbeam_channel::Sender;

use crate::controller::events::UiEvent;

/// Queues an event for the UI thread and wakes it up.
#[derive(Clone)]
pub struct UiEventSink {
    tx: Sender<UiEvent>,
    ctx: egui::Context,
}

impl UiEventSink {
    pub fn new(tx: Sender<UiEvent>, ctx: egui::Context) -> Self {
        Self { tx, ctx }
    }

    pub fn send(&self, event: UiEvent) {
        let name = event.name();
        if self.tx.send(event).is_err() {
            tracing::debug!(event = name, "ui event queue closed; window is gone");
            return;
        }
        self.ctx.request_repaint();
    }
}

/// Surfaces failed adds as a modal alert.
pub struct AlertNotifier {
    sink: UiEventSink,
}

impl AlertNotifier {
    pub fn new(sink: UiEventSink) -> Self {
        Self { sink }
    }
}

impl Notifier for AlertNotifier {
    fn notify_failure(&self, message: &str) {
        self.sink.send(UiEvent::AddFailed(message.to_string()));
    }
}
