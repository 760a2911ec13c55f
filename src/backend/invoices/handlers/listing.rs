/**
 * Invoice Listing Handler
 *
 * This module implements the cached invoice listing for
 * GET /dashboard/invoices.
 *
 * # Caching
 *
 * The rendered listing body is stored in the page cache under the request
 * path. A cache hit short-circuits the database query entirely; the write
 * handlers invalidate the path after every mutation, so the next request
 * re-renders from the database.
 */
use axum::{
    extract::State,
    http::{header, Uri},
    response::{IntoResponse, Response},
};

use crate::backend::error::BackendError;
use crate::backend::invoices::store;
use crate::backend::server::state::AppState;

fn json_body(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Cached invoice listing handler
///
/// Renders all invoices joined with their customer names, newest first,
/// serving the cached body when one is present.
///
/// # Example Response
///
/// ```json
/// [
///   {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "customer_id": "c1",
///     "customer_name": "Acme Corp",
///     "amount": 2550,
///     "status": "pending",
///     "date": "2026-08-21"
///   }
/// ]
/// ```
pub async fn invoice_listing(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, BackendError> {
    let Some(pool) = state.db_pool.as_ref() else {
        tracing::error!("Database not configured");
        return Err(BackendError::service_unavailable("Database not configured"));
    };

    if let Some(cached) = state.page_cache.get(uri.path()).await {
        tracing::debug!("Cache hit for {}", uri.path());
        return Ok(json_body(cached));
    }

    let invoices = store::list_invoices(pool).await?;
    let body = serde_json::to_string(&invoices)?;

    tracing::debug!("Cached {} for {} invoice(s)", uri.path(), invoices.len());
    state.page_cache.put(uri.path(), body.clone()).await;

    Ok(json_body(body))
}
