// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;

// Re-export commonly used types
pub use data::{MarketDataProvider, YahooProvider, fetch_outcome};
pub use domain::{
    DateMode, FetchOutcome, Interval, PricePoint, QuerySpec, render_outcome, resolve_query,
};
pub use ui::StockGrabberApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ticker symbol to pre-fill on startup
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext<'_>,
    args: &Cli,
    provider: std::sync::Arc<dyn MarketDataProvider>,
    runtime: std::sync::Arc<tokio::runtime::Runtime>,
) -> Box<dyn eframe::App> {
    let mut app = ui::StockGrabberApp::new(cc, provider, runtime);

    if let Some(symbol) = &args.symbol {
        app.prefill_symbol(symbol);
    }

    Box::new(app)
}
