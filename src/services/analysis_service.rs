//! Ticker analysis with a TTL response cache in front of the bar source.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::cache::{Cache, CacheStats};
use super::signals;
use crate::error::{AppError, Result};
use crate::sources::BarSource;
use crate::types::TaReport;

/// Whether a report was served from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
        }
    }
}

pub struct AnalysisService {
    source: Arc<dyn BarSource>,
    cache: Cache<Arc<TaReport>>,
    default_suffix: String,
}

impl AnalysisService {
    pub fn new(source: Arc<dyn BarSource>, cache_ttl: Duration, default_suffix: &str) -> Self {
        Self {
            source,
            cache: Cache::new(cache_ttl),
            default_suffix: default_suffix.to_string(),
        }
    }

    /// Trim and uppercase `raw`, appending the exchange suffix when it has none.
    ///
    /// Only ASCII letters, digits and `.`, `-`, `^`, `=` are accepted.
    pub fn normalize_ticker(&self, raw: &str) -> Result<String> {
        let ticker = raw.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(AppError::BadRequest("Ticker parameter required".to_string()));
        }
        if !ticker.chars().all(is_ticker_char) {
            return Err(AppError::BadRequest(format!("Invalid ticker: {}", raw.trim())));
        }
        if ticker.contains('.') {
            Ok(ticker)
        } else {
            Ok(format!("{}{}", ticker, self.default_suffix))
        }
    }

    /// Analyze `raw_ticker`, serving from the cache when possible.
    pub async fn report(&self, raw_ticker: &str) -> Result<(Arc<TaReport>, CacheStatus)> {
        let ticker = self.normalize_ticker(raw_ticker)?;

        if let Some(report) = self.cache.get(&ticker) {
            info!("{}: served from cache", ticker);
            return Ok((report, CacheStatus::Hit));
        }

        let bars = self.source.daily_bars(&ticker).await.map_err(|e| {
            warn!("{}: failed to fetch bars: {}", ticker, e);
            e
        })?;

        let analysis = signals::analyze(&ticker, &bars)?;
        let report = Arc::new(TaReport::from_analysis(&analysis));

        info!(
            "{}: {} bars, {} ({})",
            ticker,
            report.count,
            analysis.recommendation.overall_label.label(),
            analysis.recommendation.action.label()
        );

        self.cache.set(ticker, report.clone());
        Ok((report, CacheStatus::Miss))
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn flush_cache(&self) {
        self.cache.flush();
    }

    /// Drop expired reports, returning how many were removed.
    pub fn cleanup_cache(&self) -> usize {
        self.cache.cleanup()
    }

    /// Sweep expired reports every `period` in the background.
    pub fn start_cache_sweeper(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            service.cache_sweep_loop(period).await;
        })
    }

    async fn cache_sweep_loop(&self, period: Duration) {
        let mut interval = tokio::time::interval(period);

        loop {
            interval.tick().await;

            let removed = self.cleanup_cache();
            if removed > 0 {
                debug!("Swept {} expired reports from the cache", removed);
            }
        }
    }
}

fn is_ticker_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '^' | '=')
}
