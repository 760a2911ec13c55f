/**
 * Invoice Delete Handler
 *
 * This module implements the invoice deletion handler for
 * DELETE /api/invoices/{id}.
 *
 * The id is not checked for existence or format: the DELETE statement
 * simply affects zero rows for an unknown id, and the handler still
 * acknowledges success. Unlike create and update, deletion responds with
 * a message rather than a redirect.
 */
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::BackendError;
use crate::backend::invoices::handlers::types::InvoiceFormState;
use crate::backend::invoices::handlers::INVOICES_DASHBOARD_PATH;
use crate::backend::invoices::store;
use crate::backend::server::state::AppState;

/// Invoice deletion handler
///
/// Deletes the row addressed by the path id, invalidates the cached
/// listing, and acknowledges with `{"message": "Deleted Invoice."}`.
///
/// # Returns
///
/// * `200 OK` with the acknowledgement message
/// * `500 Internal Server Error` with `{message}` on database failure
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, BackendError> {
    let Some(pool) = state.db_pool.as_ref() else {
        tracing::error!("Database not configured");
        return Err(BackendError::service_unavailable("Database not configured"));
    };

    if let Err(err) = store::delete_invoice(pool, &id).await {
        tracing::error!("Invoice delete failed for {}: {:?}", id, err);
        let body = InvoiceFormState::message("Database Error: Failed to Delete Invoice.");
        return Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response());
    }

    tracing::info!("Deleted invoice {}", id);

    state.page_cache.invalidate(INVOICES_DASHBOARD_PATH).await;
    Ok(Json(InvoiceFormState::message("Deleted Invoice.")).into_response())
}
