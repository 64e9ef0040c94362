//! Plant records API server.

use plant_records::infra::{store, telemetry};
use plant_records::transport;
use plant_records::{Config, PlantService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = Config::from_env()?;

    // --- Store + Service Initialization ---
    tracing::info!("initializing plant store...");
    let plant_store = store::build_store(&config).await?;
    let app_state = transport::http::AppState::new(PlantService::new(plant_store));

    // --- API Server Initialization ---
    let app = transport::http::build_app(app_state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("API server listening on http://{}", listener.local_addr()?);
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received (Ctrl+C)");
}
