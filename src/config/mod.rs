//! Configuration module for the stock-grabber application.

mod debug; // Private; the public re-export forces files to use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod provider;

// Re-export commonly used items
pub use persistence::{APP_STATE_PATH, EXPORT_DEFAULT_FILENAME, EXPORT_EXTENSION};
pub use provider::YAHOO;
