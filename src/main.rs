#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eframe::NativeOptions;
use eframe::egui::ViewportBuilder;
use tokio::runtime::Runtime;

use stock_grabber::config::APP_STATE_PATH;
use stock_grabber::{Cli, MarketDataProvider, YahooProvider, run_app};

fn main() -> eframe::Result {
    // A. Init logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Shared runtime: fetch worker threads block on provider futures here
    let runtime = Arc::new(Runtime::new().expect("Failed to create Tokio runtime"));

    let provider: Arc<dyn MarketDataProvider> =
        Arc::new(YahooProvider::new().expect("Failed to build market data provider"));

    // D. Run native app
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        viewport: ViewportBuilder::default().with_inner_size([860.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stock Data Grabber",
        options,
        Box::new(move |cc| Ok(run_app(cc, &args, provider, runtime))),
    )
}
