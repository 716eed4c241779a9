//! Signal groups.
//!
//! Each group is a pure function of the latest and previous enriched bar.
//! Indicators that are unavailable on either bar are skipped: they add
//! nothing to the score and produce no message.

pub mod momentum;
pub mod strength;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use momentum::momentum;
pub use strength::trend_strength;
pub use trend::trend;
pub use volatility::volatility;
pub use volume::volume;

use crate::types::{SignalCategory, SignalDirection, SignalGroup};

/// Score accumulator shared by the group functions.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    score: i32,
    signals: Vec<String>,
}

impl Tally {
    pub(crate) fn add(&mut self, delta: i32, message: impl Into<String>) {
        self.score += delta;
        self.signals.push(message.into());
    }

    pub(crate) fn note(&mut self, message: impl Into<String>) {
        self.add(0, message);
    }

    pub(crate) fn finish(
        self,
        name: SignalCategory,
        direction: fn(i32) -> SignalDirection,
    ) -> SignalGroup {
        SignalGroup {
            name,
            score: self.score,
            direction: direction(self.score),
            signals: self.signals,
        }
    }
}
