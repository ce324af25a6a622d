use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Margin, ScrollArea, TopBottomPanel,
};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, QueryEvent, QueryPanel};

use super::app::StockGrabberApp;

impl StockGrabberApp {
    pub(super) fn render_query_panel(&mut self, ctx: &Context) {
        let query_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(10, 8));
        TopBottomPanel::top("query_panel")
            .frame(query_frame)
            .show(ctx, |ui| {
                let events = {
                    let fetch_in_flight = self.is_fetching();
                    let mut panel = QueryPanel {
                        symbol: &mut self.symbol,
                        use_calendar: &mut self.use_calendar,
                        calendar_start: &mut self.calendar_start,
                        calendar_end: &mut self.calendar_end,
                        manual_start: &mut self.manual_start,
                        manual_end: &mut self.manual_end,
                        interval: &mut self.interval,
                        fetch_in_flight,
                    };
                    panel.render(ui)
                };

                for event in events {
                    match event {
                        QueryEvent::SubmitRequested => self.start_fetch(),
                        QueryEvent::SaveRequested => self.export_display(),
                    }
                }

                ui.add_space(4.0);
            });
    }

    pub(super) fn render_output_panel(&mut self, ctx: &Context) {
        let output_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default().frame(output_frame).show(ctx, |ui| {
            ui.add_space(6.0);

            if self.is_fetching() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.spinner();
                    ui.add_space(12.0);
                    ui.heading(UI_TEXT.fetching_heading);
                });
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .id_salt("output_scroll")
                .show(ui, |ui| {
                    for line in &self.output_lines {
                        ui.monospace(line.as_str());
                    }
                });
        });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(provider) = &self.provider {
                        ui.metric(
                            UI_TEXT.source_label,
                            provider.signature(),
                            Color32::from_rgb(100, 200, 255),
                        );
                        ui.separator();
                    }

                    if self.is_fetching() {
                        ui.label_warning(UI_TEXT.fetching_status);
                    } else if let Some(elapsed) = self.last_fetch_elapsed {
                        ui.label_subdued(format!("Last fetch: {:.2}s", elapsed.as_secs_f64()));
                    } else {
                        ui.label_subdued(UI_TEXT.idle_status);
                    }

                    if let Some(status) = &self.last_export_status {
                        ui.separator();
                        ui.label_subdued(status);
                    }
                });
            });
    }
}
