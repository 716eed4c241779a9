//! Bollinger Bands indicator.

use super::{Indicator, PriceField};
use crate::types::Bar;

/// One Bollinger Bands reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandValue {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BandValue {
    /// Where `price` sits between the bands (%B): 0 at the lower band,
    /// 1 at the upper band. `None` when the bands have collapsed.
    pub fn position(&self, price: f64) -> Option<f64> {
        let width = self.upper - self.lower;
        (width > 0.0).then(|| (price - self.lower) / width)
    }
}

/// Bollinger Bands indicator.
///
/// Consists of:
/// - Middle band: SMA(20)
/// - Upper band: SMA + 2 * StdDev
/// - Lower band: SMA - 2 * StdDev
///
/// StdDev is the population standard deviation of the window.
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerBands {
    pub fn new(period: usize, std_dev_multiplier: f64) -> Self {
        Self {
            period,
            std_dev_multiplier,
        }
    }

    /// Calculate standard deviation.
    fn std_dev(values: &[f64], mean: f64) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let variance: f64 =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }
}

impl Indicator for BollingerBands {
    type Output = BandValue;

    fn id(&self) -> &str {
        "bollinger"
    }

    fn warmup(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn calculate(&self, bars: &[Bar]) -> Vec<BandValue> {
        let closes = PriceField::Close.extract(bars);
        if self.period == 0 || closes.len() < self.period {
            return Vec::new();
        }

        closes
            .windows(self.period)
            .map(|window| {
                let middle = window.iter().sum::<f64>() / self.period as f64;
                let spread = self.std_dev_multiplier * Self::std_dev(window, middle);
                BandValue {
                    upper: middle + spread,
                    middle,
                    lower: middle - spread,
                }
            })
            .collect()
    }
}
