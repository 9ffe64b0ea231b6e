//! Highlight Studio - highlight segment editor
//!
//! Entry point and main application loop.

mod app;
mod bridge;
mod launch;

use anyhow::Result;
use eframe::egui;
use highlight_client::HttpSegmentStore;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::app::HighlightApp;
use crate::bridge::ServerBridge;
use crate::launch::LaunchArgs;

fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Highlight Studio starting...");

    let args = LaunchArgs::parse(std::env::args().skip(1));
    let store = HttpSegmentStore::from_env()?;
    info!(server = %store.config().base_url, "Using highlight server");
    let bridge = ServerBridge::new(store)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 360.0])
            .with_title("Highlight Studio"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Highlight Studio",
        options,
        Box::new(move |cc| Ok(Box::new(HighlightApp::new(cc, bridge, args)))),
    )?;

    Ok(())
}
