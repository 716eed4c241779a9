pub mod analysis_service;
pub mod cache;
pub mod signals;

pub use analysis_service::{AnalysisService, CacheStatus};
pub use cache::{Cache, CacheStats};
