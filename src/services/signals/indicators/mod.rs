//! Technical indicator implementations.

pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use adx::Adx;
pub use atr::Atr;
pub use bollinger::{BandValue, BollingerBands};
pub use ema::Ema;
pub use macd::{Macd, MacdValue};
pub use rsi::Rsi;
pub use sma::Sma;

use tracing::debug;

use super::align::{align, Series};
use crate::types::Bar;

/// Trait for implementing technical indicators.
pub trait Indicator {
    /// Value produced for a single bar.
    type Output: Copy;

    /// Unique identifier for this indicator.
    fn id(&self) -> &str;

    /// Number of leading bars without output.
    fn warmup(&self) -> usize;

    /// Raw output, one value per bar from `warmup()` on.
    /// Empty when there are not enough bars.
    fn calculate(&self, bars: &[Bar]) -> Vec<Self::Output>;

    /// Output aligned onto the bar timeline.
    fn series(&self, bars: &[Bar]) -> Series<Self::Output> {
        let series = align(bars.len(), self.calculate(bars), self.warmup());
        debug!(
            "{}: {} of {} bars available",
            self.id(),
            series.available(),
            bars.len()
        );
        series
    }
}

/// Which bar field a single-input indicator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    Close,
    Volume,
}

impl PriceField {
    pub fn extract(&self, bars: &[Bar]) -> Vec<f64> {
        match self {
            PriceField::Close => bars.iter().map(|b| b.close).collect(),
            PriceField::Volume => bars.iter().map(|b| b.volume).collect(),
        }
    }
}

/// Calculate True Range.
pub(crate) fn true_range(current: &Bar, previous: &Bar) -> f64 {
    let hl = current.high - current.low;
    let hc = (current.high - previous.close).abs();
    let lc = (current.low - previous.close).abs();
    hl.max(hc).max(lc)
}

/// Wilder's smoothing: seeded with the mean of the first `period` values,
/// then `(prev * (period - 1) + value) / period`.
pub(crate) fn wilders_smooth(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(values.len() - period + 1);
    let mut smoothed = values[..period].iter().sum::<f64>() / period as f64;
    result.push(smoothed);

    for value in &values[period..] {
        smoothed = (smoothed * (period - 1) as f64 + value) / period as f64;
        result.push(smoothed);
    }

    result
}

/// Every indicator the signal groups read, aligned onto the bar timeline.
#[derive(Debug, Clone)]
pub struct IndicatorSet {
    pub sma20: Series<f64>,
    pub sma50: Series<f64>,
    pub sma200: Series<f64>,
    pub ema12: Series<f64>,
    pub ema26: Series<f64>,
    pub rsi: Series<f64>,
    pub macd: Series<MacdValue>,
    pub bollinger: Series<BandValue>,
    pub atr: Series<f64>,
    pub adx: Series<f64>,
    pub volume_avg20: Series<f64>,
}

impl IndicatorSet {
    /// Compute all indicators with their standard parameters.
    pub fn compute(bars: &[Bar]) -> Self {
        Self {
            sma20: Sma::new(20).series(bars),
            sma50: Sma::new(50).series(bars),
            sma200: Sma::new(200).series(bars),
            ema12: Ema::new(12).series(bars),
            ema26: Ema::new(26).series(bars),
            rsi: Rsi::default().series(bars),
            macd: Macd::default().series(bars),
            bollinger: BollingerBands::default().series(bars),
            atr: Atr::default().series(bars),
            adx: Adx::default().series(bars),
            volume_avg20: Sma::on(PriceField::Volume, 20).series(bars),
        }
    }
}
