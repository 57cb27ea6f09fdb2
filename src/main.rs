//! bivarmap - bivariate choropleth classification server
//!
//! Loads a CSV of regions, fits one classifier per built-in scheme and serves
//! colors, tooltip text and legends as JSON.

use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use bivarmap::data_loader::load_observations;
use bivarmap::handlers::{heartbeat, router};
use bivarmap::{
    init_tracing, log_error, log_timed_operation, AppState, BivarmapError, Config, Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before tracing so the configured level applies
    let (config, data_path) = Config::load()?;
    init_tracing(&config.log_level);
    heartbeat::mark_start();

    info!("Starting bivarmap v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!("Loading data file: {:?}", data_path);

    let observations = load_observations(&data_path, &config.data).map_err(|e| {
        log_error(&e, "loading observations");
        e
    })?;

    let state = log_timed_operation("fit_classifiers", || {
        AppState::new_shared(
            config.clone(),
            data_path.display().to_string(),
            observations,
        )
    })
    .map_err(|e| {
        log_error(&e, "fitting classifiers");
        e
    })?;

    let app = router(state);

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| BivarmapError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| BivarmapError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| BivarmapError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
