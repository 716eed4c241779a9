//! Volume group: current volume against the 20-bar average, and whether
//! heavy volume confirms the day's price move.

use super::Tally;
use crate::types::{EnrichedBar, SignalCategory, SignalDirection, SignalGroup};

pub fn volume(latest: &EnrichedBar, previous: &EnrichedBar) -> SignalGroup {
    let mut tally = Tally::default();

    if let Some(avg_volume) = latest.volume_avg20.filter(|v| *v > 0.0) {
        let ratio = latest.volume() / avg_volume;

        if ratio > 2.0 {
            tally.add(2, format!("Volume {:.1}x average: very high activity", ratio));
        } else if ratio > 1.5 {
            tally.add(1, format!("Volume {:.1}x average: above normal", ratio));
        } else if ratio < 0.5 {
            tally.add(-1, format!("Volume {:.1}x average: low activity", ratio));
        } else {
            tally.note(format!("Volume {:.1}x average: normal", ratio));
        }

        let price_change = latest.close() - previous.close();
        if price_change > 0.0 && ratio > 1.2 {
            tally.add(1, "Price rising on heavy volume: bullish confirmation");
        } else if price_change < 0.0 && ratio > 1.2 {
            tally.add(-1, "Price falling on heavy volume: bearish confirmation");
        }
    }

    tally.finish(SignalCategory::Volume, SignalDirection::from_score)
}
