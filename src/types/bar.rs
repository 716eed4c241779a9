use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of OHLCV data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Name of the first numeric field that is negative or not finite.
    pub fn invalid_field(&self) -> Option<&'static str> {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite() || *v < 0.0)
        .map(|(name, _)| name)
    }
}

/// A bar together with every indicator value at its position.
///
/// `None` means the indicator has not finished its warm-up at this bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedBar {
    #[serde(flatten)]
    pub bar: Bar,
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub sma200: Option<f64>,
    pub ema12: Option<f64>,
    pub ema26: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
    pub atr: Option<f64>,
    pub adx: Option<f64>,
    /// 20-bar average volume, current bar included.
    pub volume_avg20: Option<f64>,
}

impl EnrichedBar {
    /// An enriched bar with every indicator unavailable.
    pub fn bare(bar: Bar) -> Self {
        Self {
            bar,
            sma20: None,
            sma50: None,
            sma200: None,
            ema12: None,
            ema26: None,
            rsi: None,
            macd: None,
            macd_signal: None,
            macd_histogram: None,
            bb_upper: None,
            bb_middle: None,
            bb_lower: None,
            atr: None,
            adx: None,
            volume_avg20: None,
        }
    }

    pub fn close(&self) -> f64 {
        self.bar.close
    }

    pub fn volume(&self) -> f64 {
        self.bar.volume
    }
}
