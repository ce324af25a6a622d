use std::fmt;

use chrono::NaiveDate;

use super::Interval;

/// Which set of date inputs drives the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMode {
    /// Dates come from the two calendar pickers, which always hold a selection.
    Calendar,
    /// Dates come from the two free-text fields, which may be empty or malformed.
    Manual,
}

/// A resolved date value: a concrete calendar day, or whatever the user typed.
/// Raw text is carried untouched and left for the provider to interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryDate {
    Calendar(NaiveDate),
    Text(String),
}

impl fmt::Display for QueryDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QueryDate::Calendar(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            QueryDate::Text(text) => write!(f, "{text}"),
        }
    }
}

/// A fully resolved historical-data query. Built fresh on every submit and
/// discarded after the single fetch it drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub symbol: String,
    pub start: QueryDate,
    pub end: QueryDate,
    pub interval: Interval,
}

/// The only local validation failure. Surfaced as a rendered display line,
/// never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Manual mode was active but one or both date fields were left empty.
    MissingManualDates { symbol: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResolveError::MissingManualDates { symbol } => {
                write!(f, "missing manual start/end date for '{symbol}'")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Decide which date values drive the query and build a `QuerySpec`.
///
/// The symbol is normalized by upper-casing only; an empty or malformed symbol
/// passes through for the provider to report. Calendar mode always resolves.
/// Manual mode fails when either text field is empty, and no provider call is
/// made in that case.
pub fn resolve_query(
    mode: DateMode,
    symbol: &str,
    calendar_start: NaiveDate,
    calendar_end: NaiveDate,
    manual_start: &str,
    manual_end: &str,
    interval: Interval,
) -> Result<QuerySpec, ResolveError> {
    let symbol = symbol.to_uppercase();

    let (start, end) = match mode {
        DateMode::Calendar => (
            QueryDate::Calendar(calendar_start),
            QueryDate::Calendar(calendar_end),
        ),
        DateMode::Manual => {
            if manual_start.is_empty() || manual_end.is_empty() {
                return Err(ResolveError::MissingManualDates { symbol });
            }
            (
                QueryDate::Text(manual_start.to_string()),
                QueryDate::Text(manual_end.to_string()),
            )
        }
    };

    Ok(QuerySpec {
        symbol,
        start,
        end,
        interval,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn calendar_mode_always_resolves() {
        let spec = resolve_query(
            DateMode::Calendar,
            "amzn",
            day(2024, 1, 2),
            day(2024, 2, 2),
            "",
            "",
            Interval::Daily,
        )
        .unwrap();

        assert_eq!(spec.symbol, "AMZN");
        assert_eq!(spec.start, QueryDate::Calendar(day(2024, 1, 2)));
        assert_eq!(spec.end, QueryDate::Calendar(day(2024, 2, 2)));
        assert_eq!(spec.interval, Interval::Daily);
    }

    #[test]
    fn manual_mode_with_missing_date_fails() {
        for (start, end) in [("", "2024-02-02"), ("2024-01-02", ""), ("", "")] {
            let result = resolve_query(
                DateMode::Manual,
                "tsla",
                day(2024, 1, 1),
                day(2024, 1, 1),
                start,
                end,
                Interval::Weekly,
            );

            assert_eq!(
                result,
                Err(ResolveError::MissingManualDates {
                    symbol: "TSLA".to_string()
                })
            );
        }
    }

    #[test]
    fn manual_text_passes_through_verbatim() {
        // Malformed text is not validated here; the provider reports it.
        let spec = resolve_query(
            DateMode::Manual,
            "msft",
            day(2024, 1, 1),
            day(2024, 1, 1),
            "not-a-date",
            "2024/02/02",
            Interval::Monthly,
        )
        .unwrap();

        assert_eq!(spec.start, QueryDate::Text("not-a-date".to_string()));
        assert_eq!(spec.end, QueryDate::Text("2024/02/02".to_string()));
    }

    #[test]
    fn empty_symbol_passes_through() {
        let spec = resolve_query(
            DateMode::Calendar,
            "",
            day(2024, 1, 1),
            day(2024, 1, 2),
            "",
            "",
            Interval::Daily,
        )
        .unwrap();

        assert_eq!(spec.symbol, "");
    }

    #[test]
    fn query_date_display() {
        assert_eq!(
            QueryDate::Calendar(day(2024, 3, 9)).to_string(),
            "2024-03-09"
        );
        assert_eq!(QueryDate::Text("raw".to_string()).to_string(), "raw");
    }
}
