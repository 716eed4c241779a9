//! Exponential Moving Average (EMA) indicator.

use super::{Indicator, PriceField};
use crate::types::Bar;

/// EMA (Exponential Moving Average) indicator.
///
/// Like SMA but gives more weight to recent prices. The first value is the
/// SMA of the first `period` closes.
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// EMA series over `values`, the first entry at index `period - 1`.
    pub fn over(values: &[f64], period: usize) -> Vec<f64> {
        if period == 0 || values.len() < period {
            return Vec::new();
        }

        let multiplier = 2.0 / (period as f64 + 1.0);

        // First EMA is SMA
        let mut ema = values[..period].iter().sum::<f64>() / period as f64;
        let mut result = Vec::with_capacity(values.len() - period + 1);
        result.push(ema);

        for value in &values[period..] {
            ema = (value - ema) * multiplier + ema;
            result.push(ema);
        }

        result
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn id(&self) -> &str {
        match self.period {
            12 => "ema12",
            26 => "ema26",
            _ => "ema",
        }
    }

    fn warmup(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn calculate(&self, bars: &[Bar]) -> Vec<f64> {
        Self::over(&PriceField::Close.extract(bars), self.period)
    }
}
