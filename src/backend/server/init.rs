/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * The server initialization follows these steps:
 * 1. Load optional services (database)
 * 2. Create the application state (pool plus an empty page cache)
 * 3. Create and configure the router
 *
 * # Error Handling
 *
 * Initialization is resilient: a missing or failing database leaves the
 * server running with database-backed routes answering 503 instead of
 * refusing to start.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// This function sets up the Axum HTTP server with:
/// - Database connection pool (if configured)
/// - An empty page cache
/// - Route configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router {
    tracing::info!("Initializing xfinvoice backend server");

    // Step 1: Load optional services
    let db_pool = load_database().await;

    // Step 2: Create app state
    // The page cache starts empty; the listing handler fills it on first
    // render and write handlers invalidate it after mutations
    let app_state = AppState::new(db_pool);

    // Step 3: Create router with all routes
    let app = create_router(app_state);

    tracing::info!("Server initialization complete");

    app
}
