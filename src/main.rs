use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blog_api::{app, config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up BLOG_DATA_FILE, BLOG_API_PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("blog_api=info,tower_http=debug")),
        )
        .init();

    let config = config::config();
    info!("Starting Blog API in {:?} mode", config.environment);

    let state = AppState::new(&config.store.data_file);

    // Report storage state up front; a corrupt file is served as 500s, not hidden
    match state.store.read().await {
        Ok(posts) => info!(
            "Using post file {} ({} posts)",
            config.store.data_file.display(),
            posts.len()
        ),
        Err(e) => warn!("Post file is not readable: {}", e),
    }

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Blog API listening on http://{}", bind_addr);

    axum::serve(listener, app(state, config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
