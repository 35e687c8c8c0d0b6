#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::anyhow;
use backend::LocalBackend;
use clap::Parser;
use eframe::egui;

use crate::backend_bridge::runtime::build_runtime;
use crate::config::{init_tracing, StartupArgs, StartupConfig, APP_TITLE};
use crate::ui::CuratorApp;

fn main() -> anyhow::Result<()> {
    let config = StartupConfig::from(StartupArgs::parse());
    init_tracing(&config.log_filter);

    let runtime = build_runtime()?;
    let backend = LocalBackend::new();
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size(config.window_size)
            .with_min_inner_size([420.0, 320.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(CuratorApp::mount(
                cc.egui_ctx.clone(),
                backend,
                handle,
            )))
        }),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))?;

    tracing::info!("window closed");
    Ok(())
}
