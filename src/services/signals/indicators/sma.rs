//! Simple Moving Average (SMA) indicator.

use super::{Indicator, PriceField};
use crate::types::Bar;

/// SMA (Simple Moving Average) indicator.
///
/// Arithmetic mean of the trailing `period` values. Reads closes by default;
/// [`Sma::on`] selects another field, e.g. volume for the average volume.
pub struct Sma {
    field: PriceField,
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self::on(PriceField::Close, period)
    }

    pub fn on(field: PriceField, period: usize) -> Self {
        Self { field, period }
    }

    /// Rolling means over `values`, one per complete window.
    pub fn rolling(values: &[f64], period: usize) -> Vec<f64> {
        if period == 0 || values.len() < period {
            return Vec::new();
        }

        values
            .windows(period)
            .map(|w| w.iter().sum::<f64>() / period as f64)
            .collect()
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn id(&self) -> &str {
        match (self.field, self.period) {
            (PriceField::Close, 20) => "sma20",
            (PriceField::Close, 50) => "sma50",
            (PriceField::Close, 200) => "sma200",
            (PriceField::Volume, 20) => "volume_avg20",
            (PriceField::Volume, _) => "volume_avg",
            _ => "sma",
        }
    }

    fn warmup(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn calculate(&self, bars: &[Bar]) -> Vec<f64> {
        Self::rolling(&self.field.extract(bars), self.period)
    }
}
