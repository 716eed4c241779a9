//! Volatility group: price against the Bollinger Bands plus ATR as a share
//! of price. The ATR reading never moves the score.

use super::Tally;
use crate::services::signals::indicators::BandValue;
use crate::types::{EnrichedBar, SignalCategory, SignalDirection, SignalGroup};

pub fn volatility(latest: &EnrichedBar, _previous: &EnrichedBar) -> SignalGroup {
    let mut tally = Tally::default();
    let price = latest.close();

    if let (Some(upper), Some(lower)) = (latest.bb_upper, latest.bb_lower) {
        if price > upper {
            tally.add(-1, "Price above upper Bollinger Band: overextended");
        } else if price < lower {
            tally.add(1, "Price below lower Bollinger Band: oversold");
        } else {
            let band = BandValue {
                upper,
                middle: latest.bb_middle.unwrap_or((upper + lower) / 2.0),
                lower,
            };
            let position = band.position(price).unwrap_or(0.5);
            tally.note(format!(
                "Price inside Bollinger Bands (position {:.0}%)",
                position * 100.0
            ));
        }
    }

    if let Some(atr) = latest.atr {
        if price > 0.0 {
            let atr_pct = atr / price * 100.0;
            let level = if atr_pct > 3.0 {
                "High"
            } else if atr_pct < 1.0 {
                "Low"
            } else {
                "Normal"
            };
            tally.note(format!("{} volatility: ATR {:.2}% of price", level, atr_pct));
        }
    }

    tally.finish(
        SignalCategory::Volatility,
        SignalDirection::from_volatility_score,
    )
}
