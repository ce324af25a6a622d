//! Yahoo Finance specific configuration constants and types.

/// Default values for the REST client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    /// The chart endpoint rejects requests without a plausible user agent.
    pub user_agent: &'static str,
}

/// The master configuration struct
pub struct YahooConfig {
    /// Base URL for the Yahoo Finance query host
    pub base_url: &'static str,
    pub client: ClientDefaults,
}

pub const YAHOO: YahooConfig = YahooConfig {
    base_url: "https://query1.finance.yahoo.com",
    client: ClientDefaults {
        timeout_ms: 30_000,
        user_agent: "Mozilla/5.0 (compatible; stock-grabber/0.1)",
    },
};
