mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::BodyFatApp;
use config::ArtifactPaths;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let paths = ArtifactPaths::from_env();
    log::info!("Artifact paths: {paths:?}");
    let state = AppState::new(data::loader::load_artifacts(&paths));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 900.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Body Fat Predictor",
        options,
        Box::new(|_cc| Ok(Box::new(BodyFatApp::new(state)))),
    )
}
