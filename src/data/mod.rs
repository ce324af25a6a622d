// Provider boundary for historical market data
pub mod yahoo;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{FetchOutcome, PricePoint, QuerySpec};

// Re-export commonly used types
pub use yahoo::YahooProvider;

/// A source of historical close prices. Any provider exposing this contract is
/// substitutable; the rest of the app never sees a particular wire format.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;

    /// Fetch the close-price history for a resolved query. Row order must be
    /// exactly as returned by the upstream source.
    async fn fetch_close_history(&self, spec: &QuerySpec) -> Result<Vec<PricePoint>>;
}

/// Run one provider call and fold the result into a typed outcome. Errors are
/// caught here; nothing past this boundary raises, and nothing retries.
pub async fn fetch_outcome(provider: &dyn MarketDataProvider, spec: &QuerySpec) -> FetchOutcome {
    match provider.fetch_close_history(spec).await {
        Ok(points) if points.is_empty() => FetchOutcome::Empty,
        Ok(points) => FetchOutcome::Series(points),
        Err(e) => FetchOutcome::Failure(format!("{e:#}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Interval, QueryDate};
    use anyhow::bail;
    use chrono::NaiveDate;

    struct StubProvider {
        points: Result<Vec<PricePoint>, String>,
    }

    #[async_trait]
    impl MarketDataProvider for StubProvider {
        fn signature(&self) -> &'static str {
            "stub"
        }

        async fn fetch_close_history(&self, _spec: &QuerySpec) -> Result<Vec<PricePoint>> {
            match &self.points {
                Ok(points) => Ok(points.clone()),
                Err(message) => bail!("{message}"),
            }
        }
    }

    fn spec() -> QuerySpec {
        QuerySpec {
            symbol: "AMZN".to_string(),
            start: QueryDate::Text("2024-01-01".to_string()),
            end: QueryDate::Text("2024-02-01".to_string()),
            interval: Interval::Daily,
        }
    }

    #[tokio::test]
    async fn empty_rows_become_empty_outcome() {
        let provider = StubProvider {
            points: Ok(Vec::new()),
        };
        assert_eq!(fetch_outcome(&provider, &spec()).await, FetchOutcome::Empty);
    }

    #[tokio::test]
    async fn rows_become_series_outcome() {
        let point = PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            close: Some(150.0),
        };
        let provider = StubProvider {
            points: Ok(vec![point]),
        };
        assert_eq!(
            fetch_outcome(&provider, &spec()).await,
            FetchOutcome::Series(vec![point])
        );
    }

    #[tokio::test]
    async fn provider_errors_become_failure_outcome() {
        let provider = StubProvider {
            points: Err("Connection timed out".to_string()),
        };
        assert_eq!(
            fetch_outcome(&provider, &spec()).await,
            FetchOutcome::Failure("Connection timed out".to_string())
        );
    }
}
