//! Denomination API Server
//!
//! Main entry point for the denomination backend service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use denomination_api::{AppState, create_router, serve};
use denomination_core::{DenominationLedger, DenominationService};
use denomination_shared::{AppConfig, LoggingConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    // Build the process-wide ledger
    let ledger = DenominationLedger::new(config.denominations.values.iter().copied())
        .context("Invalid denomination configuration")?;
    let loaded: Vec<String> = ledger.iter().map(ToString::to_string).collect();
    info!(
        denominations = ?loaded,
        remainder_policy = ?config.denominations.remainder_policy,
        "Loaded denominations"
    );
    if !ledger.covers_every_cent() {
        warn!(
            smallest = %ledger.smallest(),
            "Ledger has no one-cent denomination, some amounts cannot be broken down exactly"
        );
    }

    // Create application state
    let state = AppState {
        service: Arc::new(DenominationService::new(
            Arc::new(ledger),
            config.denominations.remainder_policy,
        )),
    };

    // Create router
    let app = create_router(state, &config.cors);

    // Start server
    let addr = config.server.address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    serve(
        listener,
        app,
        shutdown_signal(),
        config.server.shutdown_timeout(),
    )
    .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "denomination_api=debug,denomination=debug,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
