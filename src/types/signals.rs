use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EnrichedBar;

/// Category of a signal group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    Trend,
    Momentum,
    Volatility,
    Volume,
    TrendStrength,
}

impl SignalCategory {
    /// Get display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            SignalCategory::Trend => "Trend",
            SignalCategory::Momentum => "Momentum",
            SignalCategory::Volatility => "Volatility",
            SignalCategory::Volume => "Volume",
            SignalCategory::TrendStrength => "Trend Strength",
        }
    }
}

/// Direction label of a signal group.
///
/// Directional groups use `Bullish`/`Bearish`/`Neutral`, the volatility group
/// uses `HighVolatility`/`LowVolatility`/`Normal` and the trend-strength group
/// uses `Strong`/`Weak`/`Moderate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalDirection {
    Bullish,
    Bearish,
    Neutral,
    HighVolatility,
    LowVolatility,
    Normal,
    Strong,
    Weak,
    Moderate,
}

impl SignalDirection {
    /// Bullish, bearish or neutral by the sign of the score.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s > 0 => SignalDirection::Bullish,
            s if s < 0 => SignalDirection::Bearish,
            _ => SignalDirection::Neutral,
        }
    }

    /// A negative volatility score means price is stretched beyond the upper band.
    pub fn from_volatility_score(score: i32) -> Self {
        match score {
            s if s < 0 => SignalDirection::HighVolatility,
            s if s > 0 => SignalDirection::LowVolatility,
            _ => SignalDirection::Normal,
        }
    }

    pub fn from_strength_score(score: i32) -> Self {
        match score {
            s if s > 1 => SignalDirection::Strong,
            s if s < 0 => SignalDirection::Weak,
            _ => SignalDirection::Moderate,
        }
    }
}

/// One scored category of technical evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalGroup {
    pub name: SignalCategory,
    pub score: i32,
    pub direction: SignalDirection,
    pub signals: Vec<String>,
}

/// The five signal groups of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signals {
    pub trend: SignalGroup,
    pub momentum: SignalGroup,
    pub volatility: SignalGroup,
    pub volume: SignalGroup,
    pub trend_strength: SignalGroup,
}

impl Signals {
    /// Mean of the trend, momentum and volume scores.
    pub fn composite_score(&self) -> f64 {
        (self.trend.score + self.momentum.score + self.volume.score) as f64 / 3.0
    }

    pub fn groups(&self) -> [&SignalGroup; 5] {
        [
            &self.trend,
            &self.momentum,
            &self.volatility,
            &self.volume,
            &self.trend_strength,
        ]
    }
}

/// Overall outlook derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outlook {
    #[serde(rename = "STRONG BULLISH")]
    StrongBullish,
    #[serde(rename = "BULLISH")]
    Bullish,
    #[serde(rename = "SLIGHTLY BULLISH")]
    SlightlyBullish,
    #[serde(rename = "NEUTRAL")]
    Neutral,
    #[serde(rename = "SLIGHTLY BEARISH")]
    SlightlyBearish,
    #[serde(rename = "BEARISH")]
    Bearish,
    #[serde(rename = "STRONG BEARISH")]
    StrongBearish,
}

impl Outlook {
    /// Map a composite score to an outlook.
    ///
    /// Thresholds are checked top-down and the first match wins.
    pub fn from_composite(score: f64) -> Self {
        if score >= 2.0 {
            Outlook::StrongBullish
        } else if score >= 1.0 {
            Outlook::Bullish
        } else if score >= 0.5 {
            Outlook::SlightlyBullish
        } else if score <= -2.0 {
            Outlook::StrongBearish
        } else if score <= -1.0 {
            Outlook::Bearish
        } else if score <= -0.5 {
            Outlook::SlightlyBearish
        } else {
            Outlook::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outlook::StrongBullish => "STRONG BULLISH",
            Outlook::Bullish => "BULLISH",
            Outlook::SlightlyBullish => "SLIGHTLY BULLISH",
            Outlook::Neutral => "NEUTRAL",
            Outlook::SlightlyBearish => "SLIGHTLY BEARISH",
            Outlook::Bearish => "BEARISH",
            Outlook::StrongBearish => "STRONG BEARISH",
        }
    }

    /// The action paired with this outlook.
    pub fn action(&self) -> Action {
        match self {
            Outlook::StrongBullish => Action::Buy,
            Outlook::Bullish => Action::BuyHold,
            Outlook::SlightlyBullish => Action::HoldAccumulate,
            Outlook::Neutral => Action::HoldWait,
            Outlook::SlightlyBearish => Action::HoldReduce,
            Outlook::Bearish => Action::SellAvoid,
            Outlook::StrongBearish => Action::Sell,
        }
    }
}

/// Suggested action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "BUY / HOLD")]
    BuyHold,
    #[serde(rename = "HOLD / ACCUMULATE")]
    HoldAccumulate,
    #[serde(rename = "HOLD / WAIT")]
    HoldWait,
    #[serde(rename = "HOLD / REDUCE")]
    HoldReduce,
    #[serde(rename = "SELL / AVOID")]
    SellAvoid,
    #[serde(rename = "SELL")]
    Sell,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::BuyHold => "BUY / HOLD",
            Action::HoldAccumulate => "HOLD / ACCUMULATE",
            Action::HoldWait => "HOLD / WAIT",
            Action::HoldReduce => "HOLD / REDUCE",
            Action::SellAvoid => "SELL / AVOID",
            Action::Sell => "SELL",
        }
    }

    pub fn is_buy(&self) -> bool {
        self.label().contains("BUY")
    }

    pub fn is_sell(&self) -> bool {
        self.label().contains("SELL")
    }
}

/// Confidence in the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn from_composite(score: f64) -> Self {
        let magnitude = score.abs();
        if magnitude > 1.5 {
            Confidence::High
        } else if magnitude > 0.5 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Kind of a recommendation note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    Warning,
    Opportunity,
    Info,
    Risk,
}

/// A supporting note attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "type")]
    pub kind: NoteKind,
    pub text: String,
}

impl Note {
    pub fn new(kind: NoteKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Final recommendation for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub overall_label: Outlook,
    pub action: Action,
    pub composite_score: f64,
    pub confidence: Confidence,
    pub notes: Vec<Note>,
}

/// Complete output of the analysis pipeline for one ticker.
#[derive(Debug, Clone)]
pub struct TechnicalAnalysis {
    pub ticker: String,
    /// Bars with every indicator aligned onto their positions.
    pub bars: Vec<EnrichedBar>,
    pub signals: Signals,
    pub recommendation: Recommendation,
    pub generated_at: DateTime<Utc>,
}

impl TechnicalAnalysis {
    /// The most recent enriched bar.
    pub fn latest(&self) -> &EnrichedBar {
        &self.bars[self.bars.len() - 1]
    }

    /// The bar before the most recent one.
    pub fn previous(&self) -> &EnrichedBar {
        &self.bars[self.bars.len() - 2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_score() {
        assert_eq!(SignalDirection::from_score(4), SignalDirection::Bullish);
        assert_eq!(SignalDirection::from_score(0), SignalDirection::Neutral);
        assert_eq!(SignalDirection::from_score(-1), SignalDirection::Bearish);
    }

    #[test]
    fn test_volatility_direction() {
        assert_eq!(
            SignalDirection::from_volatility_score(-1),
            SignalDirection::HighVolatility
        );
        assert_eq!(
            SignalDirection::from_volatility_score(1),
            SignalDirection::LowVolatility
        );
        assert_eq!(SignalDirection::from_volatility_score(0), SignalDirection::Normal);
    }

    #[test]
    fn test_strength_direction() {
        assert_eq!(SignalDirection::from_strength_score(2), SignalDirection::Strong);
        assert_eq!(SignalDirection::from_strength_score(1), SignalDirection::Moderate);
        assert_eq!(SignalDirection::from_strength_score(0), SignalDirection::Moderate);
        assert_eq!(SignalDirection::from_strength_score(-1), SignalDirection::Weak);
    }

    #[test]
    fn test_outlook_thresholds_first_match_wins() {
        assert_eq!(Outlook::from_composite(2.0), Outlook::StrongBullish);
        assert_eq!(Outlook::from_composite(1.0), Outlook::Bullish);
        assert_eq!(Outlook::from_composite(2.0 / 3.0), Outlook::SlightlyBullish);
        assert_eq!(Outlook::from_composite(0.5), Outlook::SlightlyBullish);
        assert_eq!(Outlook::from_composite(1.0 / 3.0), Outlook::Neutral);
        assert_eq!(Outlook::from_composite(0.0), Outlook::Neutral);
        assert_eq!(Outlook::from_composite(-1.0 / 3.0), Outlook::Neutral);
        assert_eq!(Outlook::from_composite(-0.5), Outlook::SlightlyBearish);
        assert_eq!(Outlook::from_composite(-1.0), Outlook::Bearish);
        assert_eq!(Outlook::from_composite(-2.0), Outlook::StrongBearish);
        assert_eq!(Outlook::from_composite(-7.0 / 3.0), Outlook::StrongBearish);
    }

    #[test]
    fn test_outlook_actions() {
        assert_eq!(Outlook::StrongBullish.action(), Action::Buy);
        assert_eq!(Outlook::Neutral.action(), Action::HoldWait);
        assert_eq!(Outlook::StrongBearish.action(), Action::Sell);
    }

    #[test]
    fn test_action_buy_sell_flags() {
        assert!(Action::Buy.is_buy());
        assert!(Action::BuyHold.is_buy());
        assert!(!Action::HoldAccumulate.is_buy());
        assert!(Action::SellAvoid.is_sell());
        assert!(!Action::HoldReduce.is_sell());
        assert!(!Action::HoldWait.is_buy() && !Action::HoldWait.is_sell());
    }

    #[test]
    fn test_confidence_thresholds() {
        assert_eq!(Confidence::from_composite(1.51), Confidence::High);
        assert_eq!(Confidence::from_composite(1.5), Confidence::Medium);
        assert_eq!(Confidence::from_composite(-0.51), Confidence::Medium);
        assert_eq!(Confidence::from_composite(0.5), Confidence::Low);
    }

    #[test]
    fn test_labels_serialize_verbatim() {
        assert_eq!(
            serde_json::to_string(&Outlook::SlightlyBullish).unwrap(),
            "\"SLIGHTLY BULLISH\""
        );
        assert_eq!(
            serde_json::to_string(&Action::SellAvoid).unwrap(),
            "\"SELL / AVOID\""
        );
        assert_eq!(
            serde_json::to_string(&SignalCategory::TrendStrength).unwrap(),
            "\"trend_strength\""
        );
        assert_eq!(
            serde_json::to_string(&SignalDirection::HighVolatility).unwrap(),
            "\"high_volatility\""
        );
    }

    #[test]
    fn test_note_serializes_kind_as_type() {
        let note = Note::new(NoteKind::Risk, "Suggested stop-loss: 3900");
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["type"], "risk");
        assert_eq!(json["text"], "Suggested stop-loss: 3900");
    }
}
