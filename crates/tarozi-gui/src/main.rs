//! GUI entry point for Tarozi

mod app;
mod ticket_panel;

use app::TaroziApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let config = tarozi_app::config::Config::load().unwrap_or_default();
    tarozi_app::logging::init(&config.log_filter);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tarozi",
        options,
        Box::new(move |cc| Ok(Box::new(TaroziApp::new(cc, config)))),
    )
}
