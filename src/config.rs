use std::env;
use std::time::Duration;

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the Yahoo Finance chart API.
    pub yahoo_base_url: String,
    /// History range requested per ticker (Yahoo `range` parameter).
    pub history_range: String,
    pub cache_ttl: Duration,
    /// Exchange suffix appended to tickers without one.
    pub default_suffix: String,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 5000),
            yahoo_base_url: env::var("YAHOO_BASE_URL")
                .unwrap_or_else(|_| "https://query1.finance.yahoo.com".to_string()),
            history_range: env::var("TA_HISTORY_RANGE").unwrap_or_else(|_| "1y".to_string()),
            cache_ttl: Duration::from_secs(parse_var("TA_CACHE_TTL_SECS", 300)),
            default_suffix: env::var("TA_DEFAULT_SUFFIX").unwrap_or_else(|_| ".JK".to_string()),
            http_timeout: Duration::from_secs(parse_var("HTTP_TIMEOUT_SECS", 30)),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            yahoo_base_url: "https://query1.finance.yahoo.com".to_string(),
            history_range: "1y".to_string(),
            cache_ttl: Duration::from_secs(300),
            default_suffix: ".JK".to_string(),
            http_timeout: Duration::from_secs(30),
        }
    }
}

/// Parse `key`, falling back to `default` when unset or malformed.
fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
