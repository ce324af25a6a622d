use chrono::NaiveDate;
use eframe::egui::{Button, ComboBox, Key, TextEdit, Ui};
use egui_extras::DatePickerButton;
use strum::IntoEnumIterator;

use crate::domain::{DateMode, Interval};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::colored_subsection_heading;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Events emitted by the query panel for the app to act on.
#[derive(Debug)]
pub enum QueryEvent {
    SubmitRequested,
    SaveRequested,
}

/// Panel for the query inputs: ticker, date mode, dates, interval, actions.
/// Borrows the app's UI state fields; it never reads anything else.
pub struct QueryPanel<'a> {
    pub symbol: &'a mut String,
    pub use_calendar: &'a mut bool,
    pub calendar_start: &'a mut NaiveDate,
    pub calendar_end: &'a mut NaiveDate,
    pub manual_start: &'a mut String,
    pub manual_end: &'a mut String,
    pub interval: &'a mut Interval,
    pub fetch_in_flight: bool,
}

impl Panel for QueryPanel<'_> {
    type Event = QueryEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<QueryEvent> {
        let mut events = Vec::new();

        ui.label(colored_subsection_heading(UI_TEXT.ticker_heading));
        let ticker_response =
            ui.add(TextEdit::singleline(self.symbol).hint_text(UI_TEXT.ticker_placeholder));

        // Enter in the ticker field submits, mirroring the fetch button.
        if ticker_response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            events.push(QueryEvent::SubmitRequested);
        }

        ui.add_space(5.0);
        let toggled = ui
            .checkbox(self.use_calendar, UI_TEXT.use_calendar_label)
            .changed();
        #[cfg(debug_assertions)]
        if toggled && DEBUG_FLAGS.print_ui_interactions {
            log::info!("Date mode switched to {:?}", self.date_mode());
        }
        #[cfg(not(debug_assertions))]
        let _ = toggled;

        ui.add_space(5.0);
        self.render_manual_inputs(ui);
        if *self.use_calendar {
            ui.add_space(5.0);
            self.render_calendar_inputs(ui);
        }

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            ui.label(colored_subsection_heading(UI_TEXT.interval_heading));
            ComboBox::from_id_salt("interval_combo")
                .selected_text(self.interval.as_str())
                .show_ui(ui, |ui| {
                    for interval in Interval::iter() {
                        ui.selectable_value(self.interval, interval, interval.as_str());
                    }
                });
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let fetch = ui.add_enabled(!self.fetch_in_flight, Button::new(UI_TEXT.fetch_button));
            if fetch.clicked() {
                events.push(QueryEvent::SubmitRequested);
            }
            if ui.button(UI_TEXT.save_button).clicked() {
                events.push(QueryEvent::SaveRequested);
            }
        });

        events
    }
}

impl QueryPanel<'_> {
    pub fn date_mode(&self) -> DateMode {
        if *self.use_calendar {
            DateMode::Calendar
        } else {
            DateMode::Manual
        }
    }

    fn render_calendar_inputs(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.start_date_label);
            ui.add(DatePickerButton::new(self.calendar_start).id_salt("start_date_picker"));
            ui.add_space(10.0);
            ui.label(UI_TEXT.end_date_label);
            ui.add(DatePickerButton::new(self.calendar_end).id_salt("end_date_picker"));
        });
    }

    /// The free-text fields stay visible in calendar mode but are disabled,
    /// so switching modes never loses what was typed.
    fn render_manual_inputs(&mut self, ui: &mut Ui) {
        let enabled = !*self.use_calendar;
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                ui.label(UI_TEXT.start_date_label);
                ui.add(
                    TextEdit::singleline(self.manual_start)
                        .desired_width(110.0)
                        .hint_text(UI_TEXT.date_hint),
                );
                ui.add_space(10.0);
                ui.label(UI_TEXT.end_date_label);
                ui.add(
                    TextEdit::singleline(self.manual_end)
                        .desired_width(110.0)
                        .hint_text(UI_TEXT.date_hint),
                );
            });
        });
    }
}
