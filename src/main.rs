use minimal_rag::api::create_router;
use minimal_rag::config::ServerConfig;
use minimal_rag::pipeline::service::Pipeline;
use minimal_rag::store::memory::DocumentStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServerConfig::load()?;

    // 1. Document store + pipeline, built once and shared read-only:
    let store = DocumentStore::seeded();
    tracing::info!("Loaded {} documents", store.len());
    let pipeline = Arc::new(Pipeline::new(store));

    // 2. HTTP Router:
    let app = create_router(pipeline);

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
