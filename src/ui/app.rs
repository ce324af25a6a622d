use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;

use crate::data::MarketDataProvider;
use crate::domain::{DateMode, Interval};
use crate::ui::app_async::FetchJobResult;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Deserialize, Serialize)]
pub struct StockGrabberApp {
    // UI state
    #[serde(default)]
    pub(super) symbol: String,
    #[serde(default = "default_use_calendar")]
    pub(super) use_calendar: bool,
    #[serde(default = "default_date")]
    pub(super) calendar_start: NaiveDate,
    #[serde(default = "default_date")]
    pub(super) calendar_end: NaiveDate,
    #[serde(default)]
    pub(super) manual_start: String,
    #[serde(default)]
    pub(super) manual_end: String,
    #[serde(default)]
    pub(super) interval: Interval,

    // Display surface - runtime only, rebuilt on every submit
    #[serde(skip)]
    pub(super) output_lines: Vec<String>,

    // Async fetch state
    #[serde(skip)]
    pub(super) fetch_promise: Option<Promise<FetchJobResult>>,
    #[serde(skip)]
    pub(super) last_fetch_elapsed: Option<Duration>,

    // Last export result, shown in the status bar
    #[serde(skip)]
    pub(super) last_export_status: Option<String>,

    // Collaborators, injected after state load (not serializable)
    #[serde(skip)]
    pub(super) provider: Option<Arc<dyn MarketDataProvider>>,
    #[serde(skip)]
    pub(super) runtime: Option<Arc<Runtime>>,
}

/// Calendar mode is the default, like a fresh install.
fn default_use_calendar() -> bool {
    true
}

/// Both pickers start on today.
fn default_date() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

impl StockGrabberApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        provider: Arc<dyn MarketDataProvider>,
        runtime: Arc<Runtime>,
    ) -> Self {
        let mut app: StockGrabberApp;

        // Attempt to load the persisted state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No usable persisted state found. Creating anew.");
                }
                app = StockGrabberApp::new_with_initial_state();
            }
        } else {
            app = StockGrabberApp::new_with_initial_state();
        }

        app.provider = Some(provider);
        app.runtime = Some(runtime);
        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            symbol: String::new(),
            use_calendar: default_use_calendar(),
            calendar_start: default_date(),
            calendar_end: default_date(),
            manual_start: String::new(),
            manual_end: String::new(),
            interval: Interval::default(),
            output_lines: Vec::new(),
            fetch_promise: None,
            last_fetch_elapsed: None,
            last_export_status: None,
            provider: None,
            runtime: None,
        }
    }

    /// Pre-fill the ticker field (used by the `--symbol` CLI argument).
    pub fn prefill_symbol(&mut self, symbol: &str) {
        self.symbol = symbol.to_uppercase();
    }

    pub(super) fn date_mode(&self) -> DateMode {
        if self.use_calendar {
            DateMode::Calendar
        } else {
            DateMode::Manual
        }
    }

    pub(super) fn is_fetching(&self) -> bool {
        self.fetch_promise.is_some()
    }
}

impl eframe::App for StockGrabberApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Abandon any in-flight fetch; its worker thread ends on its own.
        if let Some(promise) = self.fetch_promise.take() {
            drop(promise);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Pick up a completed fetch before rendering this frame
        self.poll_fetch(ctx);

        self.render_query_panel(ctx);
        self.render_status_panel(ctx);
        self.render_output_panel(ctx);
    }
}
