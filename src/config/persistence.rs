//! File persistence configuration

// App state persistence
/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".states.json";

/// Extension suggested by the export save dialog
pub const EXPORT_EXTENSION: &str = "txt";

/// Filename suggested by the export save dialog
pub const EXPORT_DEFAULT_FILENAME: &str = "stock_data.txt";
