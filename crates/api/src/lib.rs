//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Error responses
//! - CORS and request tracing layers
//! - Serving with graceful shutdown

pub mod error;
pub mod routes;
pub mod server;

use axum::Router;
use axum::http::HeaderValue;
use denomination_core::DenominationService;
use denomination_shared::CorsConfig;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use error::ApiError;
pub use server::serve;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Breakdown service over the process-wide ledger.
    pub service: Arc<DenominationService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .with_state(state)
}

/// Builds the CORS layer from configuration.
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors.allows_any() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
