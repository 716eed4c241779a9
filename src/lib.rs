//! Sinyal - technical analysis server for Indonesian equities

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use std::sync::Arc;

use config::Config;
use services::AnalysisService;

pub use error::{AnalysisError, AppError};
pub use services::signals::analyze;
pub use types::*;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analysis: Arc<AnalysisService>,
}
