//! comment-board server entry point.
//!
//! Opens the database, then starts the Axum HTTP server.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use comment_board::api;
use comment_board::app_state::AppState;
use comment_board::config::{BoardConfig, LogFormat};
use comment_board::persistence::Database;
use comment_board::service::CommentService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = BoardConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting comment-board");

    // Open storage; failure here is fatal
    let database = Database::open(&config)
        .await
        .context("database initialization failed")?;

    // Build service layer and application state
    let comment_service = CommentService::new(
        database.comment_store(),
        config.recent_comments_limit,
    );
    let app = api::build_app(AppState::new(comment_service), &config);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
