//! Shared bar fixtures for integration tests.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use sinyal::Bar;

pub const FLAT_VOLUME: f64 = 50_000_000.0;

pub fn date(offset: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap() + Duration::days(offset as i64)
}

pub fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Bar::new(
                date(i),
                close - 5.0,
                close + 10.0,
                close - 10.0,
                close,
                FLAT_VOLUME,
            )
        })
        .collect()
}

/// `count` strictly rising closes from 4000 to 4800, accelerating.
///
/// On a straight line MACD and its signal line coincide up to rounding, so
/// the MACD vote would be decided by float noise. The acceleration keeps
/// MACD clearly above its signal (see the rising-market entry in DESIGN.md).
pub fn rising_closes(count: usize) -> Vec<f64> {
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| {
            let t = i as f64 / last;
            4000.0 + 800.0 * t * t
        })
        .collect()
}

pub fn rising_bars(count: usize) -> Vec<Bar> {
    bars_from_closes(&rising_closes(count))
}

/// `count` closes from 4000 to 4800 in equal steps.
pub fn linear_closes(count: usize) -> Vec<f64> {
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| 4000.0 + 800.0 * i as f64 / last)
        .collect()
}
