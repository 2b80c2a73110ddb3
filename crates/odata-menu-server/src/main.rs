use anyhow::Result;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::info;

use odata_menu_server::database::{DbPool, SqliteMenuItemRepository};
use odata_menu_server::{build_router, telemetry, AppState, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before the log filter is read
    dotenvy::dotenv().ok();

    telemetry::init_telemetry()?;

    info!("🚀 Starting OData menu server...");

    // Load configuration
    let settings = Settings::load()?;
    info!("✅ Configuration loaded");

    // Initialize database pool
    let db_pool = DbPool::new(&settings.database).await?;
    db_pool.init_schema().await?;
    info!("✅ Database ready at {}", settings.database.url);

    let repository = Arc::new(SqliteMenuItemRepository::new(db_pool.clone()));

    let addr = SocketAddr::from((settings.server.host.parse::<IpAddr>()?, settings.server.port));

    let state = AppState::new(settings, repository);
    info!("✅ Serving $metadata from {}", state.metadata.path().display());

    let app = build_router(state);

    info!("🎯 Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
