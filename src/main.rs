use clap::Parser;
use commute_logger::config::load_dotenv;
use commute_logger::utils::{logger, validation::Validate};
use commute_logger::{build_router, AppState, ServerConfig};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = load_dotenv();
    let config = ServerConfig::parse();

    logger::init_server_logger(config.verbose, config.log_json);

    tracing::info!("Starting commute-logger v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = env_file {
        tracing::info!("Loaded environment from {}", path.display());
    }
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = build_router(AppState::from_config(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listens on port {}...", addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received shutdown signal, shutting down gracefully..."),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
