use super::{FetchOutcome, Interval, PricePoint, ResolveError};

/// Turn one fetch outcome into the display lines for a single submit action.
pub fn render_outcome(outcome: &FetchOutcome, symbol: &str, interval: Interval) -> Vec<String> {
    match outcome {
        FetchOutcome::Empty => vec![format!(
            "No data available for {symbol} in the given date range."
        )],
        FetchOutcome::Series(points) => {
            let mut lines = Vec::with_capacity(points.len() + 2);
            lines.push(format!("Close prices for {symbol} ({interval}):"));
            for point in points {
                lines.push(render_point(point));
            }
            lines.push(String::new());
            lines
        }
        FetchOutcome::Failure(message) => {
            vec![format!("Error fetching data for {symbol}: {message}")]
        }
    }
}

fn render_point(point: &PricePoint) -> String {
    let date = point.date.format("%Y-%m-%d");
    match point.close {
        Some(close) => format!("{date}: {close:.2}"),
        None => format!("{date}: Close price not available"),
    }
}

/// A failed resolution is reported on the display surface, never raised.
pub fn render_resolve_error(err: &ResolveError) -> String {
    match err {
        ResolveError::MissingManualDates { symbol } => {
            format!("Error fetching data for {symbol}: Invalid date format.")
        }
    }
}

/// Full text of the display surface, one line per entry, for file export.
pub fn display_text(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
