//! MACD (Moving Average Convergence Divergence) indicator.

use super::{Ema, Indicator, PriceField};
use crate::types::Bar;

/// One MACD reading.
///
/// `signal` and `histogram` stay unavailable until the signal EMA has warmed
/// up on the MACD line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdValue {
    pub macd: f64,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
}

/// MACD indicator.
///
/// Shows the relationship between two EMAs:
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = EMA(9) of MACD Line
/// - Histogram = MACD Line - Signal Line
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }

    /// Bars before the first signal-line value.
    pub fn signal_warmup(&self) -> usize {
        self.warmup() + self.signal_period.saturating_sub(1)
    }
}

impl Indicator for Macd {
    type Output = MacdValue;

    fn id(&self) -> &str {
        "macd"
    }

    fn warmup(&self) -> usize {
        self.slow_period.saturating_sub(1)
    }

    fn calculate(&self, bars: &[Bar]) -> Vec<MacdValue> {
        if self.fast_period > self.slow_period {
            return Vec::new();
        }

        let closes = PriceField::Close.extract(bars);
        let fast_ema = Ema::over(&closes, self.fast_period);
        let slow_ema = Ema::over(&closes, self.slow_period);

        if fast_ema.is_empty() || slow_ema.is_empty() {
            return Vec::new();
        }

        // Align the EMAs (fast starts earlier)
        let offset = self.slow_period - self.fast_period;
        let macd_line: Vec<f64> = fast_ema
            .iter()
            .skip(offset)
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        let signal_line = Ema::over(&macd_line, self.signal_period);
        let signal_offset = self.signal_period.saturating_sub(1);

        macd_line
            .iter()
            .enumerate()
            .map(|(i, &macd)| {
                let signal = i
                    .checked_sub(signal_offset)
                    .and_then(|j| signal_line.get(j))
                    .copied();
                MacdValue {
                    macd,
                    signal,
                    histogram: signal.map(|s| macd - s),
                }
            })
            .collect()
    }
}
