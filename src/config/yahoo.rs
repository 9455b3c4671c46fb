//! Yahoo Finance chart API configuration.

/// Runtime struct used by the HTTP client
pub struct YahooApiConfig {
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

impl Default for YahooApiConfig {
    fn default() -> Self {
        Self {
            timeout_ms: YAHOO.client.timeout_ms,
            user_agent: YAHOO.client.user_agent,
        }
    }
}

/// Endpoint details
pub struct ChartEndpoint {
    /// Base URL; the symbol is appended as a path segment
    pub base_url: &'static str,
    /// Bar width requested from the chart API
    pub interval: &'static str,
    /// Asks for dividend/split events so `adjclose` is populated
    pub events: &'static str,
}

/// Default values for the Rest Client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    /// The chart API rejects requests without a browser-like user agent
    pub user_agent: &'static str,
}

pub struct YahooConfig {
    pub chart: ChartEndpoint,
    pub client: ClientDefaults,
}

pub const YAHOO: YahooConfig = YahooConfig {
    chart: ChartEndpoint {
        base_url: "https://query1.finance.yahoo.com/v8/finance/chart",
        interval: "1d",
        events: "div,splits",
    },
    client: ClientDefaults {
        timeout_ms: 30_000,
        user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
    },
};
