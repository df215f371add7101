mod backend_bridge;
mod clipboard;
mod controller;
mod ui;

use clap::Parser;
use client_core::config::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use shared::i18n;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, page::PageController};
use crate::ui::LandingApp;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the generation service, e.g. http://127.0.0.1:3000
    #[arg(long)]
    api_base_url: Option<String>,
    /// UI language: `id` or `en`
    #[arg(long)]
    language: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut settings = load_settings();
    if let Some(url) = &args.api_base_url {
        settings.set_api_base_url(url);
    }
    if let Some(language) = &args.language {
        settings.set_language(language);
    }
    tracing::info!(
        api_base_url = %settings.api_base_url,
        language = %settings.language,
        "starting landing gui"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings.api_base_url.clone());

    let title = i18n::app_title(settings.language);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([760.0, 560.0]),
        ..Default::default()
    };
    let controller = PageController::new(cmd_tx, settings.language);
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(LandingApp::new(controller, ui_rx)))),
    )
}
