//! Chart-ready response payload for the technical analysis endpoint.
//!
//! Values here are rounded for display; the unrounded numbers live in
//! [`TechnicalAnalysis`](super::TechnicalAnalysis).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Action, Confidence, Note, Outlook, Signals};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvPoint {
    pub time: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmaPoint {
    pub time: NaiveDate,
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmaPoint {
    pub time: NaiveDate,
    pub ema_12: Option<f64>,
    pub ema_26: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    pub time: NaiveDate,
    pub upper: Option<f64>,
    pub middle: Option<f64>,
    pub lower: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    pub time: NaiveDate,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    pub time: NaiveDate,
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
}

/// Indicator series, each aligned with `ohlcv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorCharts {
    pub sma: Vec<SmaPoint>,
    pub ema: Vec<EmaPoint>,
    pub bb: Vec<BandPoint>,
    pub rsi: Vec<ValuePoint>,
    pub macd: Vec<MacdPoint>,
}

/// Snapshot of the most recent bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestSnapshot {
    pub price: f64,
    pub change: f64,
    pub change_pct: f64,
    pub volume: f64,
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_lower: Option<f64>,
    pub atr: Option<f64>,
    pub adx: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub overall: Outlook,
    pub action: Action,
    pub score: f64,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub ticker: String,
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub signals: Signals,
    pub summary: Summary,
    pub recommendations: Vec<Note>,
}

/// Full `/api/ta` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaReport {
    pub success: bool,
    pub ticker: String,
    pub count: usize,
    pub ohlcv: Vec<OhlcvPoint>,
    pub indicators: IndicatorCharts,
    pub latest: LatestSnapshot,
    pub analysis: AnalysisReport,
}
