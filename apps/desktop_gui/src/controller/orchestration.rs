//! Native drop forwarding and reduction of queued UI events.

use std::collections::VecDeque;

use backend::LocalBackend;
use client_core::StateStore;
use crossbeam_channel::Receiver;

use crate::controller::events::UiEvent;

/// Paths of a native drop in drop order, or `None` when nothing was dropped
/// this frame. Entries without a filesystem path are skipped, so a drop can
/// legitimately yield an empty list.
pub fn dropped_paths(files: &[egui::DroppedFile]) -> Option<Vec<String>> {
    if files.is_empty() {
        return None;
    }
    Some(
        files
            .iter()
            .filter_map(|file| file.path.as_ref())
            .map(|path| path.to_string_lossy().into_owned())
            .collect(),
    )
}

pub fn forward_dropped_files(backend: &LocalBackend, files: &[egui::DroppedFile]) {
    if let Some(paths) = dropped_paths(files) {
        tracing::debug!(paths = paths.len(), "native file drop");
        backend.emit_file_drop(paths);
    }
}

pub fn apply_ui_event(event: UiEvent, store: &mut StateStore, alerts: &mut VecDeque<String>) {
    match event {
        UiEvent::StateChanged(state) => store.replace(state),
        UiEvent::AddFailed(message) => alerts.push_back(message),
    }
}

/// Drains every queued event in arrival order. Returns how many were applied.
pub fn drain_ui_events(
    ui_rx: &Receiver<UiEvent>,
    store: &mut StateStore,
    alerts: &mut VecDeque<String>,
) -> usize {
    let mut applied = 0;
    while let Ok(event) = ui_rx.try_recv() {
        tracing::trace!(event = event.name(), "applying ui event");
        apply_ui_event(event, store, alerts);
        applied += 1;
    }
    applied
}
