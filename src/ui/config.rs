use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        subsection_heading: Color32::ORANGE, // Sets every subsection heading
        central_panel: Color32::from_rgb(25, 25, 30),
        side_panel: Color32::from_rgb(18, 18, 18),
    },
};

/// Static UI strings, grouped so panels never hard-code copy inline.
pub struct UiText {
    pub ticker_heading: &'static str,
    pub ticker_placeholder: &'static str,
    pub use_calendar_label: &'static str,
    pub start_date_label: &'static str,
    pub end_date_label: &'static str,
    pub date_hint: &'static str,
    pub interval_heading: &'static str,
    pub fetch_button: &'static str,
    pub save_button: &'static str,
    pub fetching_heading: &'static str,
    pub fetching_status: &'static str,
    pub idle_status: &'static str,
    pub source_label: &'static str,
    pub export_success_title: &'static str,
    pub export_success_body: &'static str,
    pub export_failure_title: &'static str,
}

/// Global UI text instance
pub static UI_TEXT: UiText = UiText {
    ticker_heading: "Ticker Symbol",
    ticker_placeholder: "Enter ticker symbol (e.g., AMZN)",
    use_calendar_label: "Use Calendar",
    start_date_label: "Start Date (YYYY-MM-DD):",
    end_date_label: "End Date (YYYY-MM-DD):",
    date_hint: "YYYY-MM-DD",
    interval_heading: "Interval",
    fetch_button: "Scrape",
    save_button: "Save Data",
    fetching_heading: "Fetching data...",
    fetching_status: "⚙ Fetching...",
    idle_status: "Idle",
    source_label: "📡 Source",
    export_success_title: "Success",
    export_success_body: "Data saved successfully.",
    export_failure_title: "Error",
};
