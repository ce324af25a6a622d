use std::time::{Duration, Instant};

use eframe::egui;
use poll_promise::Promise;

use crate::data::fetch_outcome;
use crate::domain::{FetchOutcome, QuerySpec, render_outcome, render_resolve_error, resolve_query};
use crate::ui::app::StockGrabberApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Result of one provider fetch, handed back to the UI thread.
pub struct FetchJobResult {
    pub(super) outcome: FetchOutcome,
    pub(super) spec: QuerySpec,
    elapsed: Duration,
}

impl FetchJobResult {
    pub(super) fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl StockGrabberApp {
    /// Resolve the current inputs and, if they validate, launch one fetch.
    ///
    /// At most one query is ever outstanding; a submit while a fetch is in
    /// flight is ignored rather than queued, so the display always reflects
    /// the most recently accepted submit.
    pub(super) fn start_fetch(&mut self) {
        if self.fetch_promise.is_some() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_fetch_progress {
                log::info!("Fetch already in flight; ignoring submit");
            }
            return;
        }

        // The display surface is cleared before every new query.
        self.output_lines.clear();
        self.last_fetch_elapsed = None;

        let spec = match resolve_query(
            self.date_mode(),
            &self.symbol,
            self.calendar_start,
            self.calendar_end,
            &self.manual_start,
            &self.manual_end,
            self.interval,
        ) {
            Ok(spec) => spec,
            Err(e) => {
                // Validation failures are rendered, never raised, and no
                // provider call is made.
                self.output_lines.push(render_resolve_error(&e));
                return;
            }
        };

        let (Some(provider), Some(runtime)) = (self.provider.clone(), self.runtime.clone()) else {
            self.output_lines.push(format!(
                "Error fetching data for {}: no data provider configured",
                spec.symbol
            ));
            return;
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_progress {
            log::info!(
                "Submitting query for '{}' ({} to {}, {})",
                spec.symbol,
                spec.start,
                spec.end,
                spec.interval
            );
        }

        let promise = Promise::spawn_thread("market_fetch", move || {
            let started = Instant::now();
            let outcome = runtime.block_on(fetch_outcome(provider.as_ref(), &spec));
            FetchJobResult {
                outcome,
                spec,
                elapsed: started.elapsed(),
            }
        });

        self.fetch_promise = Some(promise);
    }

    /// Poll the outstanding fetch, if any, and render its outcome once ready.
    pub(super) fn poll_fetch(&mut self, ctx: &egui::Context) {
        let ready = self
            .fetch_promise
            .as_ref()
            .is_some_and(|promise| promise.ready().is_some());

        if !ready {
            if self.fetch_promise.is_some() {
                ctx.request_repaint();
            }
            return;
        }

        let Some(result) = self
            .fetch_promise
            .take()
            .and_then(|promise| promise.try_take().ok())
        else {
            return;
        };

        self.output_lines =
            render_outcome(&result.outcome, &result.spec.symbol, result.spec.interval);
        self.last_fetch_elapsed = Some(result.elapsed());

        match &result.outcome {
            FetchOutcome::Failure(message) => {
                log::error!("❌ Fetch failed for '{}': {}", result.spec.symbol, message);
            }
            FetchOutcome::Empty | FetchOutcome::Series(_) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_fetch_progress {
                    log::info!(
                        "✅ Fetch for '{}' completed in {:.2}s",
                        result.spec.symbol,
                        result.elapsed().as_secs_f32()
                    );
                }
            }
        }
    }
}
