mod app;
mod components;
mod screens;
mod theme;
mod utils;

use reelplan_app_core::{AppKernel, AppStore, GeminiConfig};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([760.0, 520.0])
            .with_title("REELPLAN // CREATOR STUDIO"),
        ..Default::default()
    };

    eframe::run_native(
        "ReelPlan",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);

            let config = GeminiConfig::from_env();
            if config.api_key.is_none() {
                tracing::warn!(
                    "no API key found in {:?}; generation will fail until one is set",
                    reelplan_config::API_KEY_ENV_VARS
                );
            }

            let generator = reelplan_app_core::default_generator(config)?;
            let kernel = AppKernel::new(AppStore::default(), generator);

            Ok(Box::new(app::ReelPlanUiApp::new(kernel)))
        }),
    )
}
