//! Yahoo Finance chart API client.
//!
//! One request per submit, no retries: a failure is surfaced once and the
//! user resubmits manually.

use std::time::Duration;

use anyhow::{Context as _, Result, anyhow, bail};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime};
use reqwest::Client;
use serde::Deserialize;

use crate::config::YAHOO;
use crate::data::MarketDataProvider;
use crate::domain::{PricePoint, QueryDate, QuerySpec};

const SECS_PER_DAY: i64 = 86_400;

pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(YAHOO.client.timeout_ms))
            .user_agent(YAHOO.client.user_agent)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: YAHOO.base_url.to_string(),
        })
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn signature(&self) -> &'static str {
        "Yahoo Finance chart API"
    }

    async fn fetch_close_history(&self, spec: &QuerySpec) -> Result<Vec<PricePoint>> {
        let url = build_chart_url(&self.base_url, spec)?;

        log::info!(
            "Requesting {} history for '{}' ({} to {})",
            spec.interval,
            spec.symbol,
            spec.start,
            spec.end
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("request failed")?;
        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read response body")?;

        if !status.is_success() {
            // The chart endpoint ships a JSON error node even on 4xx/5xx;
            // prefer its description over a bare status code.
            if let Some(description) = error_description(&body) {
                bail!("{description}");
            }
            bail!("HTTP {status}");
        }

        parse_chart_response(&body)
    }
}

/// Build the v8 chart request URL from a resolved query.
fn build_chart_url(base_url: &str, spec: &QuerySpec) -> Result<String> {
    let period1 = day_start_epoch(to_naive(&spec.start)?);
    let period2 = day_end_epoch(to_naive(&spec.end)?);

    Ok(format!(
        "{}/v8/finance/chart/{}?period1={}&period2={}&interval={}&events=history",
        base_url,
        urlencoding::encode(&spec.symbol),
        period1,
        period2,
        spec.interval.as_str(),
    ))
}

/// Calendar dates arrive ready-made; manual text is parsed here, so a
/// malformed string becomes an ordinary provider error.
fn to_naive(date: &QueryDate) -> Result<NaiveDate> {
    match date {
        QueryDate::Calendar(date) => Ok(*date),
        QueryDate::Text(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|_| anyhow!("invalid date '{text}' (expected YYYY-MM-DD)")),
    }
}

/// Epoch seconds at 00:00:00 UTC on the given day.
fn day_start_epoch(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Epoch seconds at the last second of the given day. The end date is
/// inclusive: a query ending today still covers today's bar.
fn day_end_epoch(date: NaiveDate) -> i64 {
    day_start_epoch(date) + SECS_PER_DAY - 1
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartNode,
}

#[derive(Debug, Deserialize)]
struct ChartNode {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Decode a chart API body into close-price rows, preserving row order.
fn parse_chart_response(body: &str) -> Result<Vec<PricePoint>> {
    let envelope: ChartEnvelope =
        serde_json::from_str(body).context("unexpected response format")?;

    if let Some(error) = envelope.chart.error {
        bail!("{}", error.description.unwrap_or(error.code));
    }

    let Some(result) = envelope
        .chart
        .result
        .and_then(|mut results| (!results.is_empty()).then(|| results.remove(0)))
    else {
        return Ok(Vec::new());
    };

    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|quote| quote.close)
        .unwrap_or_default();

    let mut points = Vec::with_capacity(result.timestamp.len());
    for (idx, ts) in result.timestamp.iter().enumerate() {
        let Some(stamp) = DateTime::from_timestamp(*ts, 0) else {
            bail!("timestamp {ts} out of range");
        };
        points.push(PricePoint {
            date: stamp.date_naive(),
            close: closes.get(idx).copied().flatten(),
        });
    }

    Ok(points)
}

fn error_description(body: &str) -> Option<String> {
    let envelope: ChartEnvelope = serde_json::from_str(body).ok()?;
    envelope
        .chart
        .error
        .map(|error| error.description.unwrap_or(error.code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Interval;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn chart_url_encodes_symbol_and_window() {
        let spec = QuerySpec {
            symbol: "BRK.B".to_string(),
            start: QueryDate::Calendar(day(2024, 1, 2)),
            end: QueryDate::Calendar(day(2024, 1, 3)),
            interval: Interval::Weekly,
        };

        let url = build_chart_url("https://example.test", &spec).unwrap();
        assert_eq!(
            url,
            "https://example.test/v8/finance/chart/BRK.B\
             ?period1=1704153600&period2=1704326399&interval=1wk&events=history"
        );
    }

    #[test]
    fn manual_text_dates_parse_or_error() {
        assert_eq!(
            to_naive(&QueryDate::Text("2024-01-02".to_string())).unwrap(),
            day(2024, 1, 2)
        );

        let err = to_naive(&QueryDate::Text("02/01/2024".to_string())).unwrap_err();
        assert!(err.to_string().contains("expected YYYY-MM-DD"));
    }

    #[test]
    fn end_of_day_is_inclusive() {
        let date = day(2024, 1, 2);
        assert_eq!(day_end_epoch(date) - day_start_epoch(date), 86_399);
    }

    #[test]
    fn parses_rows_and_null_closes_in_order() {
        // 2024-01-02 and 2024-01-03 at 14:30 UTC, the usual bar timestamps.
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704205800, 1704292200],
                    "indicators": {
                        "quote": [{ "close": [150.0, null] }]
                    }
                }],
                "error": null
            }
        }"#;

        let points = parse_chart_response(body).unwrap();
        assert_eq!(
            points,
            vec![
                PricePoint {
                    date: day(2024, 1, 2),
                    close: Some(150.0)
                },
                PricePoint {
                    date: day(2024, 1, 3),
                    close: None
                },
            ]
        );
    }

    #[test]
    fn chart_error_node_becomes_failure() {
        let body = r#"{
            "chart": {
                "result": null,
                "error": {
                    "code": "Not Found",
                    "description": "No data found, symbol may be delisted"
                }
            }
        }"#;

        let err = parse_chart_response(body).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No data found, symbol may be delisted"
        );
    }

    #[test]
    fn missing_result_is_an_empty_series() {
        let body = r#"{ "chart": { "result": null, "error": null } }"#;
        assert!(parse_chart_response(body).unwrap().is_empty());

        let body = r#"{ "chart": { "result": [], "error": null } }"#;
        assert!(parse_chart_response(body).unwrap().is_empty());
    }

    #[test]
    fn missing_quote_block_yields_unavailable_closes() {
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704205800],
                    "indicators": { "quote": [] }
                }],
                "error": null
            }
        }"#;

        let points = parse_chart_response(body).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].close, None);
    }

    #[test]
    fn garbage_body_is_a_format_error() {
        let err = parse_chart_response("<html>rate limited</html>").unwrap_err();
        assert!(err.to_string().contains("unexpected response format"));
    }
}
