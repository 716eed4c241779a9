//! Yahoo Finance chart API client for daily OHLCV history.

use chrono::{DateTime, NaiveDate};
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::BarSource;
use crate::error::{AppError, Result};
use crate::types::Bar;

/// Yahoo Finance chart response.
#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct YahooResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
}

#[derive(Debug, Default, Deserialize)]
struct YahooQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

/// Yahoo Finance API client.
pub struct YahooFinanceClient {
    client: Client,
    base_url: Url,
    range: String,
}

impl YahooFinanceClient {
    pub fn new(base_url: &str, range: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Internal(format!("Invalid Yahoo base URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Internal(format!(
                "Invalid Yahoo base URL: {}",
                base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            range: range.to_string(),
        })
    }

    /// Chart endpoint for `ticker`. The ticker is a single encoded path segment.
    fn chart_url(&self, ticker: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v8", "finance", "chart", ticker]);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("range", &self.range)
            .append_pair("interval", "1d")
            .append_pair("includePrePost", "false");
        url
    }
}

#[axum::async_trait]
impl BarSource for YahooFinanceClient {
    async fn daily_bars(&self, ticker: &str) -> Result<Vec<Bar>> {
        let url = self.chart_url(ticker);
        debug!("Fetching Yahoo Finance data: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Unknown symbols come back as 404 with a chart error object.
        match serde_json::from_str::<YahooChartResponse>(&body) {
            Ok(data) => parse_chart(ticker, data),
            Err(e) if status.is_success() => Err(e.into()),
            Err(_) => {
                warn!("Yahoo Finance returned {} for {}", status, ticker);
                Err(AppError::ExternalApi(format!("Yahoo API error: {}", status)))
            }
        }
    }
}

fn parse_chart(ticker: &str, data: YahooChartResponse) -> Result<Vec<Bar>> {
    if let Some(error) = data.chart.error {
        return Err(AppError::NotFound(format!(
            "{}: {} - {}",
            ticker, error.code, error.description
        )));
    }

    let result = data
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| AppError::NotFound(format!("No data for {}", ticker)))?;

    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

    let mut bars: Vec<Bar> = Vec::with_capacity(timestamps.len());
    let mut skipped = 0usize;

    for (i, &timestamp) in timestamps.iter().enumerate() {
        let Some(date) = to_date(timestamp) else {
            skipped += 1;
            continue;
        };
        let field = |values: &Vec<Option<f64>>| values.get(i).copied().flatten();
        let (Some(open), Some(high), Some(low), Some(close)) = (
            field(&quote.open),
            field(&quote.high),
            field(&quote.low),
            field(&quote.close),
        ) else {
            skipped += 1;
            continue;
        };
        let volume = field(&quote.volume).unwrap_or(0.0);
        let bar = Bar::new(date, open, high, low, close, volume);

        match bars.last_mut() {
            Some(last) if last.date == date => *last = bar,
            Some(last) if last.date > date => skipped += 1,
            _ => bars.push(bar),
        }
    }

    if skipped > 0 {
        debug!("{}: skipped {} incomplete or out-of-order bars", ticker, skipped);
    }

    if bars.is_empty() {
        return Err(AppError::NotFound(format!("No data for {}", ticker)));
    }

    debug!("{}: {} daily bars", ticker, bars.len());
    Ok(bars)
}

fn to_date(timestamp: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp, 0).map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Vec<Bar>> {
        let data: YahooChartResponse = serde_json::from_str(json).unwrap();
        parse_chart("BBRI.JK", data)
    }

    // 2025-06-02, 2025-06-03, 2025-06-04 at 02:00 UTC
    const DAY1: i64 = 1_748_829_600;
    const DAY2: i64 = DAY1 + 86_400;
    const DAY3: i64 = DAY2 + 86_400;

    #[test]
    fn test_parse_chart() {
        let json = format!(
            r#"{{"chart": {{"result": [{{
                "meta": {{"symbol": "BBRI.JK"}},
                "timestamp": [{DAY1}, {DAY2}],
                "indicators": {{"quote": [{{
                    "open": [4100.0, 4120.0],
                    "high": [4150.0, 4180.0],
                    "low": [4050.0, 4100.0],
                    "close": [4120.0, 4170.0],
                    "volume": [50000000, 62000000]
                }}]}}
            }}], "error": null}}}}"#
        );
        let bars = parse(&json).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert_eq!(bars[1].close, 4170.0);
        assert_eq!(bars[1].volume, 62_000_000.0);
    }

    #[test]
    fn test_incomplete_bars_dropped_and_missing_volume_zero() {
        let json = format!(
            r#"{{"chart": {{"result": [{{
                "timestamp": [{DAY1}, {DAY2}, {DAY3}],
                "indicators": {{"quote": [{{
                    "open": [4100.0, null, 4150.0],
                    "high": [4150.0, 4180.0, 4200.0],
                    "low": [4050.0, 4100.0, 4120.0],
                    "close": [4120.0, 4170.0, 4190.0],
                    "volume": [50000000, 62000000, null]
                }}]}}
            }}], "error": null}}}}"#
        );
        let bars = parse(&json).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].date, NaiveDate::from_ymd_opt(2025, 6, 4).unwrap());
        assert_eq!(bars[1].volume, 0.0);
    }

    #[test]
    fn test_repeated_date_replaces_and_older_date_dropped() {
        let json = format!(
            r#"{{"chart": {{"result": [{{
                "timestamp": [{DAY1}, {DAY2}, {}, {DAY1}],
                "indicators": {{"quote": [{{
                    "open": [1.0, 2.0, 3.0, 4.0],
                    "high": [1.0, 2.0, 3.0, 4.0],
                    "low": [1.0, 2.0, 3.0, 4.0],
                    "close": [1.0, 2.0, 3.0, 4.0],
                    "volume": [10, 20, 30, 40]
                }}]}}
            }}], "error": null}}}}"#,
            DAY2 + 3_600
        );
        let bars = parse(&json).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].close, 3.0);
    }

    #[test]
    fn test_chart_error_is_not_found() {
        let json = r#"{"chart": {"result": null, "error": {
            "code": "Not Found",
            "description": "No data found, symbol may be delisted"
        }}}"#;
        let err = parse(json).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains("BBRI.JK"));
    }

    #[test]
    fn test_empty_result_is_not_found() {
        let json = r#"{"chart": {"result": [{
            "indicators": {"quote": [{}]}
        }], "error": null}}"#;
        assert!(matches!(parse(json).unwrap_err(), AppError::NotFound(_)));
    }

    #[test]
    fn test_chart_url() {
        let client = YahooFinanceClient::new(
            "https://query1.finance.yahoo.com/",
            "1y",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            client.chart_url("BBRI.JK").as_str(),
            "https://query1.finance.yahoo.com/v8/finance/chart/BBRI.JK?range=1y&interval=1d&includePrePost=false"
        );
    }

    #[test]
    fn test_chart_url_keeps_ticker_in_one_segment() {
        let client =
            YahooFinanceClient::new("http://127.0.0.1:9/yahoo", "6mo", Duration::from_secs(5))
                .unwrap();
        let url = client.chart_url("BBRI.JK?range=max&interval=1m#");

        assert_eq!(url.path(), "/yahoo/v8/finance/chart/BBRI.JK%3Frange=max&interval=1m%23");
        assert_eq!(url.fragment(), None);
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            query,
            vec![
                ("range".to_string(), "6mo".to_string()),
                ("interval".to_string(), "1d".to_string()),
                ("includePrePost".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_rejects_relative_base_url() {
        assert!(matches!(
            YahooFinanceClient::new("query1.finance.yahoo.com", "1y", Duration::from_secs(5)),
            Err(AppError::Internal(_))
        ));
    }
}
