//! HTTP API Layer
//!
//! This crate exposes the warranty quote calculator over HTTP using Axum.
//! It holds no state beyond configuration: every request is priced from
//! scratch.
//!
//! # Architecture
//!
//! - **Handlers**: Health, quote pricing and checkout capture
//! - **Middleware**: Request logging and tracing
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{config::ApiConfig, create_router};
//!
//! let app = create_router(ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use domain_pricing::{QuoteCalculator, StandardVehicleAdjuster};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, quote};
use crate::middleware::request_logging;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub calculator: QuoteCalculator,
}

impl AppState {
    /// Builds state with the standard vehicle adjuster at the configured rates
    pub fn new(config: ApiConfig) -> Self {
        let adjuster = StandardVehicleAdjuster::new(config.adjustment_rates());
        Self {
            calculator: QuoteCalculator::new(Arc::new(adjuster)),
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState::new(config);

    // Public routes
    let public_routes = Router::new().route("/health", get(health::health_check));

    // Quote routes
    let quote_routes = Router::new()
        .route("/", post(quote::price_quote))
        .route("/checkout", post(quote::checkout));

    let api_routes = Router::new()
        .nest("/quotes", quote_routes)
        .layer(axum_middleware::from_fn(request_logging));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
