/**
 * Invoice Create Handler
 *
 * This module implements the invoice creation handler for POST /api/invoices.
 *
 * # Request Flow
 *
 * 1. Validate the form fields against the shared invoice schema
 * 2. On validation failure, return the field-keyed errors as a 422 (data,
 *    not an error)
 * 3. Insert the row (amount already in minor units, date stamped today)
 * 4. On database failure, return a generic message as a 500 (data, not an
 *    error)
 * 5. Invalidate the cached listing page and redirect to it (303)
 */
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    Form,
};

use crate::backend::error::BackendError;
use crate::backend::invoices::handlers::types::InvoiceFormState;
use crate::backend::invoices::handlers::INVOICES_DASHBOARD_PATH;
use crate::backend::invoices::schema::{validate_invoice, InvoiceForm};
use crate::backend::invoices::store;
use crate::backend::server::state::AppState;

/// Invoice creation handler
///
/// Validates the submitted form, inserts the invoice, invalidates the
/// cached listing, and redirects to the listing route.
///
/// # Arguments
///
/// * `State(state)` - Application state with the database pool and page cache
/// * `Form(form)` - Raw invoice form fields
///
/// # Returns
///
/// * `303 See Other` to `/dashboard/invoices` on success
/// * `422 Unprocessable Entity` with `{errors, message}` on validation failure
/// * `500 Internal Server Error` with `{message}` on database failure
///
/// # Example Request
///
/// ```http
/// POST /api/invoices HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// customerId=c1&amount=25.50&status=pending
/// ```
pub async fn create_invoice(
    State(state): State<AppState>,
    Form(form): Form<InvoiceForm>,
) -> Result<Response, BackendError> {
    let Some(pool) = state.db_pool.as_ref() else {
        tracing::error!("Database not configured");
        return Err(BackendError::service_unavailable("Database not configured"));
    };

    let input = match validate_invoice(&form) {
        Ok(input) => input,
        Err(errors) => {
            tracing::warn!("Invoice creation rejected: {} invalid field(s)", errors.len());
            let body =
                InvoiceFormState::validation(errors, "Missing Fields. Failed to Create Invoice.");
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response());
        }
    };

    let invoice = match store::create_invoice(pool, &input).await {
        Ok(invoice) => invoice,
        Err(err) => {
            tracing::error!("Invoice insert failed: {:?}", err);
            let body = InvoiceFormState::message("Database Error: Failed to Create Invoice.");
            return Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response());
        }
    };

    tracing::info!("Created invoice {} for customer {}", invoice.id, invoice.customer_id);

    state.page_cache.invalidate(INVOICES_DASHBOARD_PATH).await;
    Ok(Redirect::to(INVOICES_DASHBOARD_PATH).into_response())
}
