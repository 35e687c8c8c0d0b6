use std::{collections::VecDeque, sync::Arc};

use backend::LocalBackend;
use client_core::{
    mount_view, CommandGateway, FileUrlLocator, FocusController, ListView, StateStore,
    SubscriptionManager,
};
use crossbeam_channel::{unbounded, Receiver};
use tokio::runtime::Handle;

use crate::backend_bridge::{
    runtime::finish_teardown,
    sink::{AlertNotifier, UiEventSink},
};
use crate::controller::{
    events::UiEvent,
    orchestration::{drain_ui_events, forward_dropped_files},
};
use crate::ui::cards::{paint_drop_hint, show_cards, show_placeholder};

pub struct CuratorApp {
    backend: Arc<LocalBackend>,
    runtime: Handle,
    gateway: CommandGateway,
    subscriptions: SubscriptionManager,
    ui_rx: Receiver<UiEvent>,
    store: StateStore,
    focus: FocusController,
    locator: FileUrlLocator,
    view: ListView,
    view_revision: u64,
    alerts: VecDeque<String>,
}

impl CuratorApp {
    /// Subscribes the view to both backend channels.
    pub fn mount(ctx: egui::Context, backend: Arc<LocalBackend>, runtime: Handle) -> Self {
        // Unbounded: a dropped broadcast would leave the list stale.
        let (ui_tx, ui_rx) = unbounded();
        let sink = UiEventSink::new(ui_tx, ctx);
        let gateway = CommandGateway::new(
            backend.clone(),
            Arc::new(AlertNotifier::new(sink.clone())),
            runtime.clone(),
        );
        let subscriptions = mount_view(backend.clone(), gateway.clone(), move |state| {
            sink.send(UiEvent::StateChanged(state))
        });
        tracing::info!("view mounted");

        Self {
            backend,
            runtime,
            gateway,
            subscriptions,
            ui_rx,
            store: StateStore::new(),
            focus: FocusController::new(),
            locator: FileUrlLocator,
            view: ListView::Placeholder,
            view_revision: 0,
            alerts: VecDeque::new(),
        }
    }

    fn refresh_view(&mut self) {
        if self.store.revision() != self.view_revision {
            self.view = ListView::project(self.store.state(), &self.locator);
            self.view_revision = self.store.revision();
        }
        self.focus.observe(&self.store);
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alerts.front() else {
            return;
        };

        let mut dismissed = false;
        let modal = egui::Modal::new(egui::Id::new("add-image-failed")).show(ctx, |ui| {
            ui.set_max_width(380.0);
            ui.heading("Could not add image");
            ui.add_space(6.0);
            ui.label(message.as_str());
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
        if dismissed || modal.should_close() {
            self.alerts.pop_front();
        }
    }
}

impl eframe::App for CuratorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        drain_ui_events(&self.ui_rx, &mut self.store, &mut self.alerts);
        self.refresh_view();

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        forward_dropped_files(&self.backend, &dropped);
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.view {
                ListView::Placeholder => show_placeholder(ui),
                ListView::Cards(cards) => show_cards(ui, cards, &mut self.focus, &self.gateway),
            }
            if hovering {
                paint_drop_hint(ui);
            }
        });

        self.show_alert(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        tracing::info!("view unmounting");
        let teardown = self.subscriptions.teardown();
        finish_teardown(&self.runtime, teardown);
    }
}
