//! Combination of bars and aligned indicator series into [`EnrichedBar`]s.

use super::indicators::IndicatorSet;
use crate::types::{Bar, EnrichedBar};

/// Attach every indicator value to the bar at the same position.
pub fn enrich(bars: &[Bar], indicators: &IndicatorSet) -> Vec<EnrichedBar> {
    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let macd = indicators.macd.get(i);
            let bands = indicators.bollinger.get(i);
            EnrichedBar {
                bar: *bar,
                sma20: indicators.sma20.get(i),
                sma50: indicators.sma50.get(i),
                sma200: indicators.sma200.get(i),
                ema12: indicators.ema12.get(i),
                ema26: indicators.ema26.get(i),
                rsi: indicators.rsi.get(i),
                macd: macd.map(|m| m.macd),
                macd_signal: macd.and_then(|m| m.signal),
                macd_histogram: macd.and_then(|m| m.histogram),
                bb_upper: bands.map(|b| b.upper),
                bb_middle: bands.map(|b| b.middle),
                bb_lower: bands.map(|b| b.lower),
                atr: indicators.atr.get(i),
                adx: indicators.adx.get(i),
                volume_avg20: indicators.volume_avg20.get(i),
            }
        })
        .collect()
}
