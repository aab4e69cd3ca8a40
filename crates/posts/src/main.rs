mod app;
mod config;
mod handlers;
mod state;
mod storage;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

/// Posts - CRUD API for blog posts stored in a key-value table
#[derive(Parser, Debug)]
#[command(name = "posts")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "posts=debug,tower_http=debug".into());

    // CloudWatch indexes one JSON object per line
    #[cfg(feature = "lambda")]
    let fmt_layer = tracing_subscriber::fmt::layer().json().without_time();
    #[cfg(not(feature = "lambda"))]
    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    let config = Config::from_env();
    tracing::debug!(config = ?config, "Loaded configuration");

    // Create application state over the configured posts table
    let state = AppState::new(&config).await?;

    // Build the application router
    let app = create_app(state);

    serve(cli, app).await
}

/// Run behind the Lambda runtime. Host and port are ignored.
#[cfg(feature = "lambda")]
async fn serve(_cli: Cli, app: axum::Router) -> Result<()> {
    tracing::info!("Starting Lambda runtime");

    lambda_http::run(app)
        .await
        .map_err(|e| anyhow::anyhow!("lambda runtime failed: {e}"))
}

/// Run as a standalone HTTP server.
#[cfg(not(feature = "lambda"))]
async fn serve(cli: Cli, app: axum::Router) -> Result<()> {
    use listenfd::ListenFd;
    use tokio::net::TcpListener;

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
#[cfg(not(feature = "lambda"))]
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
