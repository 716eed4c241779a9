//! Average True Range (ATR) indicator.

use super::{true_range, wilders_smooth, Indicator};
use crate::types::Bar;

/// ATR (Average True Range) indicator.
///
/// Measures market volatility by calculating the average of true ranges:
/// TR = max(High-Low, |High-PrevClose|, |Low-PrevClose|)
///
/// The first bar has no previous close, so the first ATR lands on bar
/// `period`, smoothed with Wilder's method from there on.
pub struct Atr {
    period: usize,
}

impl Default for Atr {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Atr {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Atr {
    type Output = f64;

    fn id(&self) -> &str {
        "atr"
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn calculate(&self, bars: &[Bar]) -> Vec<f64> {
        let true_ranges: Vec<f64> = bars
            .windows(2)
            .map(|w| true_range(&w[1], &w[0]))
            .collect();

        wilders_smooth(&true_ranges, self.period)
    }
}
