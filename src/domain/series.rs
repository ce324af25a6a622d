use chrono::NaiveDate;

/// One row of a historical series: a trading day and its closing price.
/// `close` is `None` when the provider returned no value for that day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: Option<f64>,
}

/// Typed result of one provider call, matched exhaustively by the renderer.
/// Series rows keep the provider's order; nothing downstream re-sorts them.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The query was valid but yielded no rows.
    Empty,
    /// Rows in the exact order the provider returned them.
    Series(Vec<PricePoint>),
    /// The provider call failed; the message is rendered verbatim.
    Failure(String),
}
