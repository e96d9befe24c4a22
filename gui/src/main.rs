// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use anyhow::Result;
use dioxus::prelude::*;
use dioxus_desktop::tao::dpi::LogicalSize;
use dioxus_desktop::{Config as DesktopConfig, WindowBuilder};
use engine::services::HistoryService;
use std::path::Path;
use std::sync::Arc;

mod app;
mod components;
mod config;
mod state;

use app::{App, SharedService};
use config::AppConfig;

fn main() -> Result<()> {
    // Optional first argument: a JSON config replacing the embedded default.
    let app_config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(Path::new(&path))?,
        None => AppConfig::load_default()?,
    };

    tracing_subscriber::fmt().with_max_level(app_config.engine.tracing_level()).init();
    tracing::info!(version = %app_config.version, pair = %app_config.engine.api.pair, "Starting GUI (Dioxus Desktop)...");

    let service: SharedService = Arc::new(HistoryService::from_settings(&app_config.engine)?);

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.window.title.clone())
            .with_inner_size(LogicalSize::new(f64::from(app_config.window.width), f64::from(app_config.window.height))),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .with_context(service)
        .launch(App);

    tracing::info!("GUI finished.");
    Ok(())
}
