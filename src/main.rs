use anyhow::{anyhow, Context, Result};
use eframe::egui;
use log::info;

mod api;
mod config;
mod controllers;
mod error;
mod gui;
mod models;


use api::Api;
use config::Config;
use gui::state::AppState;
use gui::PollingApp;

fn main() -> Result<()> {
    let config = Config::load();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let runtime = tokio::runtime::Runtime::new().context("failed to start the tokio runtime")?;
    let api = Api::new(config.api_url(), config.request_timeout())
        .context("failed to build the HTTP client")?;
    info!("Using polling API at {}", api.base_url());

    let state = AppState::new(
        api,
        runtime.handle().clone(),
        config.page,
        config.voting_event_id,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Paredão")
            .with_inner_size(egui::vec2(960.0, 640.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Paredão",
        options,
        Box::new(move |cc| Ok(Box::new(PollingApp::new(cc, state)))),
    )
    .map_err(|e| anyhow!("UI terminated with an error: {}", e))?;

    runtime.shutdown_background();
    Ok(())
}
