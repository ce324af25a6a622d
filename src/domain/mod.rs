// Core decision and formatting logic, kept free of UI state
pub mod interval;
pub mod query;
pub mod report;
pub mod series;

// Re-export commonly used types
pub use interval::Interval;
pub use query::{DateMode, QueryDate, QuerySpec, ResolveError, resolve_query};
pub use report::{display_text, render_outcome, render_resolve_error};
pub use series::{FetchOutcome, PricePoint};
