use std::time::Duration;

use tracing_subscriber::EnvFilter;

use kalite_server::config::ServerConfig;
use kalite_server::state::spawn_sweeper;
use kalite_server::{app_router, build_state};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("KALITE_LOG_FORMAT").is_ok_and(|f| f == "json") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = ServerConfig::load()?;
    let state = build_state(&config)?;
    let _sweeper = spawn_sweeper(
        state.sessions.clone(),
        Duration::from_secs(config.session_idle_secs),
    );
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind.as_str()).await?;
    tracing::info!(addr = %listener.local_addr()?, "kalite-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
