// User interface components
pub mod app;
pub mod app_async;
pub mod config;
pub mod export;
pub mod styles;
pub mod ui_panels;
pub mod ui_render;
pub mod utils;

// Re-export main app
pub use app::StockGrabberApp;
pub use config::UI_CONFIG;
