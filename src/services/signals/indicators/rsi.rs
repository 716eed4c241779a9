//! Relative Strength Index (RSI) indicator.

use super::Indicator;
use crate::types::Bar;

/// RSI (Relative Strength Index) indicator.
///
/// Measures momentum by comparing the magnitude of recent gains to recent losses.
/// Values range from 0-100:
/// - Below 30: Oversold (potential buy signal)
/// - Above 70: Overbought (potential sell signal)
///
/// Average gain and loss use Wilder smoothing. The first value needs
/// `period` close-to-close changes, so it lands on bar `period`.
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    fn from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            // A window without any movement sits at the midpoint.
            return if avg_gain == 0.0 { 50.0 } else { 100.0 };
        }

        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn id(&self) -> &str {
        "rsi"
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn calculate(&self, bars: &[Bar]) -> Vec<f64> {
        let period = self.period;
        if period == 0 || bars.len() < period + 1 {
            return Vec::new();
        }

        let (gains, losses): (Vec<f64>, Vec<f64>) = bars
            .windows(2)
            .map(|w| {
                let change = w[1].close - w[0].close;
                if change > 0.0 {
                    (change, 0.0)
                } else {
                    (0.0, -change)
                }
            })
            .unzip();

        // Calculate initial averages
        let mut avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
        let mut avg_loss = losses[..period].iter().sum::<f64>() / period as f64;

        let mut result = Vec::with_capacity(gains.len() - period + 1);
        result.push(Self::from_averages(avg_gain, avg_loss));

        // Use smoothed averages for remaining data
        for i in period..gains.len() {
            avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
            avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
            result.push(Self::from_averages(avg_gain, avg_loss));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_rsi_id() {
        assert_eq!(Rsi::default().id(), "rsi");
    }

    #[test]
    fn test_rsi_warmup() {
        assert_eq!(Rsi::default().warmup(), 14);
        let series = Rsi::default().series(&create_uptrend_bars(30));
        assert_eq!(series.leading_unavailable(), 14);
        assert_eq!(series.available(), 16);
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let rsi = Rsi::default();
        assert!(rsi.calculate(&create_uptrend_bars(14)).is_empty());
        assert_eq!(rsi.calculate(&create_uptrend_bars(15)).len(), 1);
    }

    #[test]
    fn test_rsi_uptrend_high_value() {
        let values = Rsi::default().calculate(&create_uptrend_bars(50));
        let rsi = *values.last().unwrap();
        assert!(rsi > 50.0, "RSI in uptrend should be > 50, got {}", rsi);
    }

    #[test]
    fn test_rsi_downtrend_low_value() {
        let values = Rsi::default().calculate(&create_downtrend_bars(50));
        let rsi = *values.last().unwrap();
        assert!(rsi < 50.0, "RSI in downtrend should be < 50, got {}", rsi);
    }

    #[test]
    fn test_rsi_value_range() {
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 10.0)
            .collect();
        let values = Rsi::default().calculate(&bars_from_closes(&closes));
        assert!(values.iter().all(|v| (0.0..=100.0).contains(v)));
    }

    #[test]
    fn test_rsi_known_values() {
        // Wilder's 14-day worked example; published figures are computed
        // from averages rounded to four places, hence the tolerance.
        let closes = [
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
            45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
        ];
        let expected = [70.53, 66.32, 66.55, 69.41, 66.36, 57.97];

        let values = Rsi::default().calculate(&bars_from_closes(&closes));
        assert_eq!(values.len(), expected.len());
        for (got, want) in values.iter().zip(expected) {
            assert!((got - want).abs() < 0.1, "expected {}, got {}", want, got);
        }
    }

    #[test]
    fn test_rsi_flat_series_is_midpoint() {
        let values = Rsi::default().calculate(&bars_from_closes(&[100.0; 20]));
        assert!(values.iter().all(|v| *v == 50.0));
    }

    #[test]
    fn test_rsi_only_gains_is_100() {
        let values = Rsi::default().calculate(&create_uptrend_bars(20));
        assert!(values.iter().all(|v| *v == 100.0));
    }

    #[test]
    fn test_rsi_custom_period() {
        let rsi = Rsi::new(7);
        assert_eq!(rsi.warmup(), 7);
        assert_eq!(rsi.calculate(&create_uptrend_bars(20)).len(), 13);
    }
}
