//! Trend group: price against the 20/50/200-bar averages plus the
//! SMA50/SMA200 crossover.

use super::Tally;
use crate::types::{EnrichedBar, SignalCategory, SignalDirection, SignalGroup};

pub fn trend(latest: &EnrichedBar, previous: &EnrichedBar) -> SignalGroup {
    let mut tally = Tally::default();
    let price = latest.close();

    let averages = [
        (latest.sma20, "SMA-20", 1, "short-term bullish", "short-term bearish"),
        (latest.sma50, "SMA-50", 1, "medium-term bullish", "medium-term bearish"),
        (latest.sma200, "SMA-200", 2, "long-term uptrend", "long-term downtrend"),
    ];

    for (value, label, weight, above, below) in averages {
        let Some(sma) = value else { continue };
        if price > sma {
            tally.add(weight, format!("Price above {} ({:.2}): {}", label, sma, above));
        } else {
            tally.add(-weight, format!("Price below {} ({:.2}): {}", label, sma, below));
        }
    }

    if let (Some(sma50), Some(sma200), Some(prev50), Some(prev200)) =
        (latest.sma50, latest.sma200, previous.sma50, previous.sma200)
    {
        if sma50 > sma200 && prev50 <= prev200 {
            tally.add(3, "GOLDEN CROSS detected: strong bullish signal");
        } else if sma50 < sma200 && prev50 >= prev200 {
            tally.add(-3, "DEATH CROSS detected: strong bearish signal");
        }
    }

    tally.finish(SignalCategory::Trend, SignalDirection::from_score)
}
