pub mod components;
pub mod runtime;
pub mod screens;
pub mod state;

use anyhow::{anyhow, Result};
use eframe::egui;
use eframe::NativeOptions;
use tracing::info;

use crate::config::AppConfig;
use crate::generation::{GeminiBackend, Humanizer};

pub const WINDOW_TITLE: &str = "Humanoide AI";

pub fn launch_ui(config: &AppConfig) -> Result<()> {
    let backend = GeminiBackend::new(config)?;
    let humanizer = Humanizer::new(backend, config.model.clone());
    let runtime = runtime::GenerationRuntime::spawn(humanizer)?;
    let app = screens::humanizer::HumanizerApp::new(runtime);
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1200.0, 820.0]),
        ..NativeOptions::default()
    };
    info!(model = %config.model, endpoint = %config.endpoint, "launching window");
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(app)
        }),
    )
    .map_err(|err| anyhow!(err.to_string()))
}
