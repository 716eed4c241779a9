//! Average Directional Index (ADX) indicator.

use super::{true_range, wilders_smooth, Indicator};
use crate::types::Bar;

/// ADX (Average Directional Index) indicator.
///
/// Measures trend strength (not direction):
/// - Below 20: Weak trend / ranging market
/// - 20-40: Trending
/// - Above 40: Strong trend
///
/// DX needs `period` smoothed moves (first on bar `period`) and ADX smooths
/// `period` DX values, so the first ADX lands on bar `2 * period - 1`.
pub struct Adx {
    period: usize,
}

impl Default for Adx {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Adx {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    fn directional_index(plus_dm: f64, minus_dm: f64, atr: f64) -> f64 {
        if atr == 0.0 {
            return 0.0;
        }

        let plus_di = (plus_dm / atr) * 100.0;
        let minus_di = (minus_dm / atr) * 100.0;

        let di_sum = plus_di + minus_di;
        if di_sum > 0.0 {
            ((plus_di - minus_di).abs() / di_sum) * 100.0
        } else {
            0.0
        }
    }
}

impl Indicator for Adx {
    type Output = f64;

    fn id(&self) -> &str {
        "adx"
    }

    fn warmup(&self) -> usize {
        (self.period * 2).saturating_sub(1)
    }

    fn calculate(&self, bars: &[Bar]) -> Vec<f64> {
        if self.period == 0 || bars.len() < self.warmup() + 1 {
            return Vec::new();
        }

        let mut plus_dm = Vec::with_capacity(bars.len() - 1);
        let mut minus_dm = Vec::with_capacity(bars.len() - 1);
        let mut tr = Vec::with_capacity(bars.len() - 1);

        // Calculate DM and TR
        for w in bars.windows(2) {
            let (previous, current) = (&w[0], &w[1]);

            let up_move = current.high - previous.high;
            let down_move = previous.low - current.low;

            plus_dm.push(if up_move > down_move && up_move > 0.0 {
                up_move
            } else {
                0.0
            });
            minus_dm.push(if down_move > up_move && down_move > 0.0 {
                down_move
            } else {
                0.0
            });

            tr.push(true_range(current, previous));
        }

        let smoothed_plus_dm = wilders_smooth(&plus_dm, self.period);
        let smoothed_minus_dm = wilders_smooth(&minus_dm, self.period);
        let smoothed_tr = wilders_smooth(&tr, self.period);

        let dx_values: Vec<f64> = smoothed_tr
            .iter()
            .zip(smoothed_plus_dm.iter().zip(smoothed_minus_dm.iter()))
            .map(|(&atr, (&plus, &minus))| Self::directional_index(plus, minus, atr))
            .collect();

        wilders_smooth(&dx_values, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_adx_warmup() {
        let adx = Adx::default();
        assert_eq!(adx.id(), "adx");
        assert_eq!(adx.warmup(), 27);
    }

    #[test]
    fn test_adx_insufficient_data() {
        let adx = Adx::default();
        assert!(adx.calculate(&create_uptrend_bars(27)).is_empty());
        assert_eq!(adx.calculate(&create_uptrend_bars(28)).len(), 1);
    }

    #[test]
    fn test_adx_series_alignment() {
        let series = Adx::default().series(&create_uptrend_bars(50));
        assert_eq!(series.leading_unavailable(), 27);
        assert_eq!(series.available(), 23);
    }

    #[test]
    fn test_adx_strong_in_steady_trend() {
        let values = Adx::default().calculate(&create_uptrend_bars(60));
        let adx = *values.last().unwrap();
        assert!(adx > 40.0, "steady uptrend should read as strong, got {}", adx);
    }

    #[test]
    fn test_adx_value_range() {
        let closes: Vec<f64> = (0..80)
            .map(|i| 100.0 + (i as f64 * 0.4).sin() * 8.0)
            .collect();
        let values = Adx::default().calculate(&bars_from_closes(&closes));
        assert!(!values.is_empty());
        assert!(values.iter().all(|v| (0.0..=100.0).contains(v)));
    }

    #[test]
    fn test_adx_known_values() {
        // (high, low, close)
        let rows = [
            (10.0, 8.0, 9.0),
            (12.0, 9.0, 11.0), // +DM 2, TR 3
            (13.0, 10.0, 12.0), // +DM 1, TR 3
            (12.0, 9.0, 10.0), // -DM 1, TR 3
            (11.0, 7.0, 8.0),  // -DM 2, TR 4
        ];
        let bars: Vec<Bar> = rows
            .iter()
            .enumerate()
            .map(|(i, &(h, l, c))| Bar::new(date(i), c, h, l, c, 1000.0))
            .collect();

        // Smoothed over 2: +DM 1.5, 0.75, 0.375; -DM 0, 0.5, 1.25; TR 3, 3, 3.5
        // DX 100, 20, 700/13; ADX (100 + 20) / 2, then (60 + 700/13) / 2
        let values = Adx::new(2).calculate(&bars);
        let expected = [60.0, 1480.0 / 26.0];
        assert_eq!(values.len(), expected.len());
        for (got, want) in values.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "expected {}, got {}", want, got);
        }
    }

    #[test]
    fn test_adx_flat_market_is_zero() {
        let values = Adx::default().calculate(&bars_from_closes(&[100.0; 40]));
        assert!(values.iter().all(|v| *v == 0.0));
    }
}
