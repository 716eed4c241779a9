//! Momentum group: RSI zones, RSI/price divergence and MACD.

use super::Tally;
use crate::types::{EnrichedBar, SignalCategory, SignalDirection, SignalGroup};

pub fn momentum(latest: &EnrichedBar, previous: &EnrichedBar) -> SignalGroup {
    let mut tally = Tally::default();
    let price = latest.close();

    if let Some(rsi) = latest.rsi {
        if rsi > 70.0 {
            tally.add(-2, format!("RSI ({:.1}): OVERBOUGHT zone, possible reversal", rsi));
        } else if rsi < 30.0 {
            tally.add(2, format!("RSI ({:.1}): OVERSOLD zone, possible bounce", rsi));
        } else if rsi > 60.0 {
            tally.add(1, format!("RSI ({:.1}): bullish momentum", rsi));
        } else if rsi < 40.0 {
            tally.add(-1, format!("RSI ({:.1}): bearish momentum", rsi));
        } else {
            tally.note(format!("RSI ({:.1}): neutral zone", rsi));
        }

        if let Some(prev_rsi) = previous.rsi {
            if price > previous.close() && rsi < prev_rsi {
                tally.add(-1, "Bearish RSI divergence detected");
            } else if price < previous.close() && rsi > prev_rsi {
                tally.add(1, "Bullish RSI divergence detected");
            }
        }
    }

    if let (Some(macd), Some(signal)) = (latest.macd, latest.macd_signal) {
        if macd > signal {
            tally.add(1, "MACD above signal line: bullish");
        } else {
            tally.add(-1, "MACD below signal line: bearish");
        }

        if let (Some(prev_hist), Some(hist)) = (previous.macd_histogram, latest.macd_histogram) {
            if prev_hist < 0.0 && hist > 0.0 {
                tally.add(2, "BULLISH MACD crossover: buy signal");
            } else if prev_hist > 0.0 && hist < 0.0 {
                tally.add(-2, "BEARISH MACD crossover: sell signal");
            }
        }
    }

    tally.finish(SignalCategory::Momentum, SignalDirection::from_score)
}
