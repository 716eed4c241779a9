//! Alignment of indicator output onto the bar timeline.
//!
//! Indicators produce one value per bar once their warm-up window is
//! complete, so their raw output is shorter than the bar sequence. Every
//! indicator goes through [`align`] so that position `i` of any series
//! refers to bar `i`.

use serde::Serialize;

/// An indicator series aligned 1:1 with the bar sequence.
///
/// `None` marks a position where the indicator is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series<T> {
    values: Vec<Option<T>>,
}

impl<T: Copy> Series<T> {
    /// A series of `len` unavailable positions.
    pub fn unavailable(len: usize) -> Self {
        Self {
            values: vec![None; len],
        }
    }

    /// Value at bar `index`, `None` when unavailable or out of range.
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of positions holding a value.
    pub fn available(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Number of unavailable positions before the first value.
    pub fn leading_unavailable(&self) -> usize {
        self.values.iter().take_while(|v| v.is_none()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
        self.values.iter().copied()
    }

    /// Project each available value, keeping alignment.
    pub fn map<U: Copy>(&self, f: impl Fn(T) -> Option<U>) -> Series<U> {
        Series {
            values: self.values.iter().map(|v| v.and_then(&f)).collect(),
        }
    }
}

/// Place `raw` onto a timeline of `len` bars, starting at bar `warmup`.
///
/// Positions before `warmup` are unavailable, position `i >= warmup` holds
/// `raw[i - warmup]`. An empty `raw` (indicator window not reached) yields an
/// all-unavailable series. The result always has exactly `len` positions.
pub fn align<T: Copy>(len: usize, raw: Vec<T>, warmup: usize) -> Series<T> {
    debug_assert!(
        raw.is_empty() || raw.len() + warmup == len,
        "raw output of {} values does not fit {} bars with warm-up {}",
        raw.len(),
        len,
        warmup
    );

    let lead = warmup.min(len);
    let mut values: Vec<Option<T>> = Vec::with_capacity(len);
    values.resize(lead, None);
    values.extend(raw.into_iter().take(len - lead).map(Some));
    values.resize(len, None);

    Series { values }
}
