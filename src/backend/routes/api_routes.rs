/**
 * API Route Handlers
 *
 * This module registers the application's routes, split by exposure:
 * public authentication endpoints and the invoice routes that sit behind
 * the bearer-token middleware.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/me` - Current user info (verifies its own bearer token)
 *
 * ## Invoices (protected)
 * - `POST /api/invoices` - Create an invoice
 * - `PUT /api/invoices/{id}` - Update an invoice
 * - `DELETE /api/invoices/{id}` - Delete an invoice
 * - `GET /api/customers` - Customers for the invoice form
 * - `GET /dashboard/invoices` - Cached invoice listing
 */

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::handlers::{login, me, signup};
use crate::backend::invoices::handlers::{
    create_invoice, delete_invoice, invoice_listing, list_customers, update_invoice,
    INVOICES_DASHBOARD_PATH,
};
use crate::backend::server::state::AppState;

/// Configure public API routes
///
/// Adds the authentication endpoints. These stay outside the bearer-token
/// middleware: signup and login issue tokens, and `me` verifies its own
/// header because it needs the claims.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
}

/// Configure invoice routes
///
/// Adds the invoice write endpoints, the customer listing backing the
/// invoice form, and the cached listing page. The caller wraps the
/// returned routes in the authentication middleware.
pub fn configure_invoice_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Invoice write endpoints
        .route("/api/invoices", post(create_invoice))
        .route(
            "/api/invoices/{id}",
            put(update_invoice).delete(delete_invoice),
        )
        // Invoice form support
        .route("/api/customers", get(list_customers))
        // Cached listing page
        .route(INVOICES_DASHBOARD_PATH, get(invoice_listing))
}
