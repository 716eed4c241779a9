use sinyal::config::Config;
use sinyal::services::AnalysisService;
use sinyal::sources::YahooFinanceClient;
use sinyal::{api, AppState};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How often expired reports are swept from the response cache.
const CACHE_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sinyal=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env());
    info!("Starting Sinyal server on {}:{}", config.host, config.port);

    let yahoo = YahooFinanceClient::new(
        &config.yahoo_base_url,
        &config.history_range,
        config.http_timeout,
    )?;
    info!(
        "Bars from {} (range {}), cache TTL {}s",
        config.yahoo_base_url,
        config.history_range,
        config.cache_ttl.as_secs()
    );

    let analysis = Arc::new(AnalysisService::new(
        Arc::new(yahoo),
        config.cache_ttl,
        &config.default_suffix,
    ));
    analysis.start_cache_sweeper(CACHE_SWEEP_INTERVAL);

    let state = AppState {
        config: config.clone(),
        analysis,
    };

    let app = api::app(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Sinyal server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
