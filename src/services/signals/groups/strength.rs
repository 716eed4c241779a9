//! Trend strength group, read from ADX.

use super::Tally;
use crate::types::{EnrichedBar, SignalCategory, SignalDirection, SignalGroup};

pub fn trend_strength(latest: &EnrichedBar, _previous: &EnrichedBar) -> SignalGroup {
    let mut tally = Tally::default();

    if let Some(adx) = latest.adx {
        if adx > 40.0 {
            tally.add(2, format!("ADX ({:.1}): very strong trend", adx));
        } else if adx > 25.0 {
            tally.add(1, format!("ADX ({:.1}): strong trend", adx));
        } else if adx > 20.0 {
            tally.note(format!("ADX ({:.1}): developing trend", adx));
        } else {
            tally.add(-1, format!("ADX ({:.1}): weak trend / ranging", adx));
        }
    }

    tally.finish(
        SignalCategory::TrendStrength,
        SignalDirection::from_strength_score,
    )
}
