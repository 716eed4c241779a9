//! Daily bar sources.

pub mod yahoo;

pub use yahoo::YahooFinanceClient;

use crate::error::Result;
use crate::types::Bar;

/// Supplier of daily bars for one ticker.
///
/// Bars come back oldest first with strictly increasing dates. Failures are
/// returned as-is; callers do not retry.
#[axum::async_trait]
pub trait BarSource: Send + Sync {
    async fn daily_bars(&self, ticker: &str) -> Result<Vec<Bar>>;
}
