//! Conversion of a [`TechnicalAnalysis`] into the chart-ready [`TaReport`].

use crate::types::{
    AnalysisReport, BandPoint, EmaPoint, IndicatorCharts, LatestSnapshot, MacdPoint, OhlcvPoint,
    SmaPoint, Summary, TaReport, TechnicalAnalysis, ValuePoint,
};

const PRICE_DP: i32 = 2;
const MACD_DP: i32 = 4;

/// Round `value` to `dp` decimal places.
pub fn round_to(value: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    (value * factor).round() / factor
}

fn price(value: f64) -> f64 {
    round_to(value, PRICE_DP)
}

fn opt_price(value: Option<f64>) -> Option<f64> {
    value.map(price)
}

fn opt_macd(value: Option<f64>) -> Option<f64> {
    value.map(|v| round_to(v, MACD_DP))
}

impl TaReport {
    pub fn from_analysis(analysis: &TechnicalAnalysis) -> Self {
        let bars = &analysis.bars;

        let ohlcv = bars
            .iter()
            .map(|b| OhlcvPoint {
                time: b.bar.date,
                open: price(b.bar.open),
                high: price(b.bar.high),
                low: price(b.bar.low),
                close: price(b.bar.close),
                volume: b.bar.volume,
            })
            .collect();

        let indicators = IndicatorCharts {
            sma: bars
                .iter()
                .map(|b| SmaPoint {
                    time: b.bar.date,
                    sma_20: opt_price(b.sma20),
                    sma_50: opt_price(b.sma50),
                    sma_200: opt_price(b.sma200),
                })
                .collect(),
            ema: bars
                .iter()
                .map(|b| EmaPoint {
                    time: b.bar.date,
                    ema_12: opt_price(b.ema12),
                    ema_26: opt_price(b.ema26),
                })
                .collect(),
            bb: bars
                .iter()
                .map(|b| BandPoint {
                    time: b.bar.date,
                    upper: opt_price(b.bb_upper),
                    middle: opt_price(b.bb_middle),
                    lower: opt_price(b.bb_lower),
                })
                .collect(),
            rsi: bars
                .iter()
                .map(|b| ValuePoint {
                    time: b.bar.date,
                    value: opt_price(b.rsi),
                })
                .collect(),
            macd: bars
                .iter()
                .map(|b| MacdPoint {
                    time: b.bar.date,
                    macd: opt_macd(b.macd),
                    signal: opt_macd(b.macd_signal),
                    histogram: opt_macd(b.macd_histogram),
                })
                .collect(),
        };

        let latest = analysis.latest();
        let previous = analysis.previous();
        let change = latest.close() - previous.close();
        let change_pct = if previous.close() > 0.0 {
            change / previous.close() * 100.0
        } else {
            0.0
        };

        let snapshot = LatestSnapshot {
            price: price(latest.close()),
            change: price(change),
            change_pct: price(change_pct),
            volume: latest.volume(),
            sma_20: opt_price(latest.sma20),
            sma_50: opt_price(latest.sma50),
            sma_200: opt_price(latest.sma200),
            rsi: opt_price(latest.rsi),
            macd: opt_macd(latest.macd),
            macd_signal: opt_macd(latest.macd_signal),
            bb_upper: opt_price(latest.bb_upper),
            bb_lower: opt_price(latest.bb_lower),
            atr: opt_price(latest.atr),
            adx: opt_price(latest.adx),
        };

        let rec = &analysis.recommendation;
        let report = AnalysisReport {
            ticker: analysis.ticker.clone(),
            timestamp: analysis.generated_at,
            price: price(latest.close()),
            signals: analysis.signals.clone(),
            summary: Summary {
                overall: rec.overall_label,
                action: rec.action,
                score: price(rec.composite_score),
                confidence: rec.confidence,
            },
            recommendations: rec.notes.clone(),
        };

        Self {
            success: true,
            ticker: analysis.ticker.clone(),
            count: bars.len(),
            ohlcv,
            indicators,
            latest: snapshot,
            analysis: report,
        }
    }
}
