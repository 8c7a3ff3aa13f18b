//! Storefront HTTP router.
//!
//! Composes all handlers into a single Axum router.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// API routes.
///
/// # Routes
///
/// - `GET  /catalog/flowers` - Flower catalog
/// - `GET  /catalog/presets` - Preset bouquets
/// - `POST /preview` - Generate a bouquet preview image
/// - `POST /orders` - Submit a finalized order
#[must_use]
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/catalog/flowers", get(handlers::list_flowers))
        .route("/catalog/presets", get(handlers::list_presets))
        .route("/preview", post(handlers::generate_preview))
        .route("/orders", post(handlers::submit_order))
        .with_state(state)
}

/// The full application router, with health check and versioned API
#[must_use]
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_router(state))
}
