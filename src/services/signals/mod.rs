//! Technical analysis pipeline.
//!
//! Bars go through the indicator engine, get enriched with the aligned
//! indicator values, are scored into five signal groups and finally
//! summarized into a recommendation. Everything here is synchronous and
//! free of I/O.

pub mod align;
pub mod enrich;
pub mod groups;
pub mod indicators;
pub mod recommendation;
pub mod report;

pub use align::{align, Series};
pub use enrich::enrich;
pub use indicators::{Indicator, IndicatorSet};
pub use recommendation::recommend;

use chrono::Utc;
use tracing::debug;

use crate::error::AnalysisError;
use crate::types::{Bar, EnrichedBar, Signals, TechnicalAnalysis};

/// Fewest bars the pipeline accepts.
pub const MIN_BARS: usize = 50;

/// Run the full pipeline over `bars` for `ticker`.
pub fn analyze(ticker: &str, bars: &[Bar]) -> Result<TechnicalAnalysis, AnalysisError> {
    validate(bars)?;

    let indicators = IndicatorSet::compute(bars);
    let enriched = enrich(bars, &indicators);
    let signals = score(&enriched)?;

    let latest = &enriched[enriched.len() - 1];
    let recommendation = recommend(ticker, &signals, latest);
    debug!(
        "{}: composite {:.2} -> {}",
        ticker,
        recommendation.composite_score,
        recommendation.overall_label.label()
    );

    Ok(TechnicalAnalysis {
        ticker: ticker.to_string(),
        bars: enriched,
        signals,
        recommendation,
        generated_at: Utc::now(),
    })
}

/// Evaluate the five signal groups on the last two enriched bars.
pub fn score(bars: &[EnrichedBar]) -> Result<Signals, AnalysisError> {
    if bars.len() < MIN_BARS {
        return Err(AnalysisError::InsufficientData {
            required: MIN_BARS,
            available: bars.len(),
        });
    }

    let latest = &bars[bars.len() - 1];
    let previous = &bars[bars.len() - 2];

    let signals = Signals {
        trend: groups::trend(latest, previous),
        momentum: groups::momentum(latest, previous),
        volatility: groups::volatility(latest, previous),
        volume: groups::volume(latest, previous),
        trend_strength: groups::trend_strength(latest, previous),
    };

    for group in signals.groups() {
        debug!(
            "{} score {} ({} signals)",
            group.name.name(),
            group.score,
            group.signals.len()
        );
    }

    Ok(signals)
}

fn validate(bars: &[Bar]) -> Result<(), AnalysisError> {
    if bars.len() < MIN_BARS {
        return Err(AnalysisError::InsufficientData {
            required: MIN_BARS,
            available: bars.len(),
        });
    }

    for (index, bar) in bars.iter().enumerate() {
        if let Some(field) = bar.invalid_field() {
            return Err(AnalysisError::InvalidBar { index, field });
        }
        if index > 0 && bar.date <= bars[index - 1].date {
            return Err(AnalysisError::UnorderedBars { index });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::indicators::test_support::*;
    use super::*;
    use crate::types::SignalCategory;

    #[test]
    fn test_rejects_short_history() {
        let bars = create_uptrend_bars(49);
        assert_eq!(
            analyze("BBRI.JK", &bars).unwrap_err(),
            AnalysisError::InsufficientData {
                required: 50,
                available: 49
            }
        );
    }

    #[test]
    fn test_accepts_minimum_history() {
        let bars = create_uptrend_bars(50);
        let analysis = analyze("BBRI.JK", &bars).unwrap();
        assert_eq!(analysis.bars.len(), 50);
        assert!(analysis.latest().sma200.is_none());
        assert!(analysis.latest().sma50.is_some());
    }

    #[test]
    fn test_rejects_repeated_date() {
        let mut bars = create_uptrend_bars(60);
        bars[30].date = bars[29].date;
        assert_eq!(
            analyze("BBRI.JK", &bars).unwrap_err(),
            AnalysisError::UnorderedBars { index: 30 }
        );
    }

    #[test]
    fn test_rejects_negative_volume() {
        let mut bars = create_uptrend_bars(60);
        bars[12].volume = -5.0;
        assert_eq!(
            analyze("BBRI.JK", &bars).unwrap_err(),
            AnalysisError::InvalidBar {
                index: 12,
                field: "volume"
            }
        );
    }

    #[test]
    fn test_one_group_per_category() {
        let bars = create_downtrend_bars(120);
        let signals = analyze("BBRI.JK", &bars).unwrap().signals;
        let names: Vec<SignalCategory> = signals.groups().iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            vec![
                SignalCategory::Trend,
                SignalCategory::Momentum,
                SignalCategory::Volatility,
                SignalCategory::Volume,
                SignalCategory::TrendStrength,
            ]
        );
    }

    #[test]
    fn test_downtrend_is_bearish() {
        let bars = create_downtrend_bars(120);
        let analysis = analyze("BBRI.JK", &bars).unwrap();
        assert!(analysis.signals.trend.score < 0);
        assert!(analysis.recommendation.composite_score < 0.0);
    }

    #[test]
    fn test_score_requires_minimum_history() {
        let bars = create_uptrend_bars(60);
        let enriched = enrich(&bars, &IndicatorSet::compute(&bars));
        assert!(score(&enriched[..49]).is_err());
        assert!(score(&enriched[..50]).is_ok());
    }
}
