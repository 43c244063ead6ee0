mod app;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::SpaceXDashApp;
use eframe::egui;
use spacex_dash::config::{DashConfig, DASHBOARD_TITLE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use spacex_dash::data::loader;
use spacex_dash::state::AppState;
use spacex_dash::stats::PayloadStats;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashConfig::from_env();

    // The table is loaded once; a missing or malformed file aborts startup.
    let dataset = loader::load_csv(&config.data_path)
        .inspect_err(|e| log::error!("Failed to load launch data: {e}"))
        .with_context(|| format!("loading launch data from {}", config.data_path.display()))?;
    log::info!(
        "{} sites, {} booster categories",
        dataset.sites.len(),
        dataset.booster_categories.len()
    );
    let payload_stats =
        PayloadStats::from_dataset(&dataset).context("dataset has no payload values")?;
    let state = AppState::new(dataset, payload_stats);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        DASHBOARD_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(SpaceXDashApp::new(state)))),
    )
    .map_err(|e| anyhow!("dashboard window failed: {e}"))
}
