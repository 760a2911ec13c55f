/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * Routes are assembled in a specific order:
 * 1. Public API routes (auth)
 * 2. Protected invoice routes, wrapped in the bearer-token middleware
 * 3. Fallback handler (404)
 *
 * The trace layer wraps everything so every request is logged.
 */

use axum::{http::StatusCode, middleware, response::IntoResponse, Router};
use tower_http::trace::TraceLayer;

use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::{configure_api_routes, configure_invoice_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the database pool and
///   page cache
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let public_routes = configure_api_routes(Router::new());

    // route_layer applies only to the routes registered above it, so the
    // middleware never runs for public routes or the fallback
    let protected_routes = configure_invoice_routes(Router::new()).route_layer(
        middleware::from_fn_with_state(app_state.clone(), auth_middleware),
    );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Fallback handler for unknown routes
async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
