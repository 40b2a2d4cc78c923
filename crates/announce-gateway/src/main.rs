mod auth;
mod config;
mod errors;
mod routes;
mod state;
mod throttle;
mod validate;

use std::sync::Arc;

use announce_core::{AnnouncementStore, DynamoStore, MemoryStore, init_logging};
use tracing::{info, warn};

use crate::config::{GatewayConfig, StoreKind};
use crate::errors::GatewayError;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    init_logging();

    let config = GatewayConfig::from_env()?;

    let store: Arc<dyn AnnouncementStore> = match config.store {
        StoreKind::Memory => Arc::new(MemoryStore::new()),
        StoreKind::DynamoDb => {
            Arc::new(DynamoStore::new(config.handler.table_name.as_str()).await)
        }
    };

    let app = routes::router(AppState::new(store, &config));
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    info!(
        addr = %config.bind_addr,
        store = ?config.store,
        table = %config.handler.table_name,
        error_mode = ?config.handler.error_mode,
        post_rate = config.post_limit.rate_per_sec,
        get_rate = config.get_limit.rate_per_sec,
        burst = config.post_limit.burst,
        "announce gateway listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("announce gateway stopped");
    Ok(())
}

/// Resolve on Ctrl+C. If the handler cannot be installed the server runs
/// until killed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
