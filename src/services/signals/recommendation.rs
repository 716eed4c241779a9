//! Composite score, outlook label and supporting notes.

use crate::types::{
    Confidence, EnrichedBar, Note, NoteKind, Outlook, Recommendation, Signals,
};

/// Multiplier applied to the upper band for the top of the resistance zone.
const RESISTANCE_MARGIN: f64 = 1.02;
/// Stop-loss distance below price, in ATRs.
const STOP_LOSS_ATRS: f64 = 2.0;

/// Build the recommendation for `ticker` from its signal groups.
///
/// Only trend, momentum and volume feed the composite score.
pub fn recommend(ticker: &str, signals: &Signals, latest: &EnrichedBar) -> Recommendation {
    let composite_score = signals.composite_score();
    let outlook = Outlook::from_composite(composite_score);
    let action = outlook.action();
    let price = latest.close();

    let mut notes = Vec::new();

    if action.is_sell() {
        notes.push(Note::new(
            NoteKind::Warning,
            format!(
                "Consider reducing the position or setting a tight stop-loss for {}",
                ticker
            ),
        ));
    }
    if action.is_buy() {
        notes.push(Note::new(
            NoteKind::Opportunity,
            format!(
                "{} shows bullish signals: consider accumulating on pullbacks",
                ticker
            ),
        ));
    }

    if let (Some(lower), Some(sma20)) = (latest.bb_lower, latest.sma20) {
        notes.push(Note::new(
            NoteKind::Info,
            format!("Entry zone: {} - {}", whole(lower), whole(sma20)),
        ));
    }

    if let Some(upper) = latest.bb_upper {
        notes.push(Note::new(
            NoteKind::Info,
            format!(
                "Resistance zone: {} - {}",
                whole(upper),
                whole(upper * RESISTANCE_MARGIN)
            ),
        ));
    }

    if let Some(atr) = latest.atr {
        notes.push(Note::new(
            NoteKind::Risk,
            format!(
                "Suggested stop-loss: {} (2x ATR below current price)",
                whole(price - STOP_LOSS_ATRS * atr)
            ),
        ));
    }

    Recommendation {
        overall_label: outlook,
        action,
        composite_score,
        confidence: Confidence::from_composite(composite_score),
        notes,
    }
}

/// Round half away from zero to a whole price.
fn whole(value: f64) -> String {
    format!("{:.0}", value.round())
}
