//! Warranty Quote API - Server Binary
//!
//! This binary starts the HTTP API server for the warranty quote calculator.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin warranty-quote-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 API_MOTORBIKE_DISCOUNT_PERCENT=20 cargo run --bin warranty-quote-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_MOTORBIKE_DISCOUNT_PERCENT` - Motorcycle discount (default: 25)
//! * `API_LARGE_VEHICLE_SURCHARGE_PER_YEAR` - SUV/van surcharge per year in GBP (default: 50)
//! * `API_PREMIUM_MARQUE_SURCHARGE_PERCENT` - Premium marque surcharge (default: 10)

use interface_api::{config::ApiConfig, create_router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads and validates configuration, and starts the
/// HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment or is invalid
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;

    init_tracing(&config.log_level);

    config.validate()?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        motorbike_discount = %config.motorbike_discount_percent,
        large_vehicle_surcharge = %config.large_vehicle_surcharge_per_year,
        premium_marque_surcharge = %config.premium_marque_surcharge_percent,
        "Starting Warranty Quote API Server"
    );

    let addr: SocketAddr = config.server_addr().parse()?;
    let app = create_router(config);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=debug", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
