//! RoadPilot Settings Console
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use roadpilot_settings::config;

mod app;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting RoadPilot settings console v{}",
        env!("CARGO_PKG_VERSION")
    );

    let app_config = config::load_config().unwrap_or_else(|e| {
        tracing::warn!("failed to load config, using defaults: {}", e);
        config::AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                app_config.ui.window_width,
                app_config.ui.window_height,
            ])
            .with_min_inner_size([800.0, 600.0])
            .with_title("RoadPilot Settings"),
        ..Default::default()
    };

    eframe::run_native(
        "RoadPilot Settings",
        options,
        Box::new(|cc| {
            let app = app::SettingsApp::new(cc, app_config)?;
            Ok(Box::new(app))
        }),
    )
}
