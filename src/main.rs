//! lumen-bridge entry point.
//!
//! Loads configuration, wires the Tuya adapter into the HTTP surface, and
//! serves the bridge router.

use std::sync::Arc;
use std::time::Duration;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use lumen_bridge::adapters::http::{bridge_router, AppState};
use lumen_bridge::adapters::tuya::TuyaPlatformAdapter;
use lumen_bridge::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let platform = Arc::new(TuyaPlatformAdapter::new(&config.platform));
    let state = AppState::new(platform, config.platform.device_id.clone());

    let app = bridge_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, environment = ?config.server.environment, "lumen-bridge listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
