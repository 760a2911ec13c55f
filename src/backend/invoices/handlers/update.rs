/**
 * Invoice Update Handler
 *
 * This module implements the invoice update handler for
 * PUT /api/invoices/{id}.
 *
 * Validation and the response contract mirror invoice creation; the
 * differences are that the row is addressed by the path id, the stored
 * date is left unchanged, and the summary messages name the update
 * operation. The id itself is not validated: updating an unknown id
 * affects zero rows and still redirects.
 */
use axum::{
    extract::{Path, State},
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

/// Invoice update handler
///
/// Validates the submitted form, updates the row addressed by the path id,
/// invalidates the cached listing, and redirects to the listing route.
///
/// # Returns
///
/// * `303 See Other` to `/dashboard/invoices` on success
/// * `422 Unprocessable Entity` with `{errors, message}` on validation failure
/// * `500 Internal Server Error` with `{message}` on database failure
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<InvoiceForm>,
) -> Result<Response, BackendError> {
    let Some(pool) = state.db_pool.as_ref() else {
        tracing::error!("Database not configured");
        return Err(BackendError::service_unavailable("Database not configured"));
    };

    let input = match validate_invoice(&form) {
        Ok(input) => input,
        Err(errors) => {
            tracing::warn!(
                "Invoice update rejected for {}: {} invalid field(s)",
                id,
                errors.len()
            );
            let body =
                InvoiceFormState::validation(errors, "Missing Fields. Failed to Update Invoice.");
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response());
        }
    };

    if let Err(err) = store::update_invoice(pool, &id, &input).await {
        tracing::error!("Invoice update failed for {}: {:?}", id, err);
        let body = InvoiceFormState::message("Database Error: Failed to Update Invoice.");
        return Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response());
    }

    tracing::info!("Updated invoice {}", id);

    state.page_cache.invalidate(INVOICES_DASHBOARD_PATH).await;
    Ok(Redirect::to(INVOICES_DASHBOARD_PATH).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::invoices::schema::{InvoiceInput, InvoiceStatus};
    use crate::backend::invoices::store::{create_invoice, get_invoice_by_id};
    use axum::http::header;

    fn paid_form() -> InvoiceForm {
        InvoiceForm {
            customer_id: "c2".to_string(),
            amount: "25.50".to_string(),
            status: "paid".to_string(),
        }
    }

    async fn seed_invoice(pool: &sqlx::SqlitePool) -> store::Invoice {
        let input = InvoiceInput {
            customer_id: "c1".to_string(),
            amount: 1000,
            status: InvoiceStatus::Pending,
        };
        create_invoice(pool, &input).await.unwrap()
    }

    #[tokio::test]
    async fn test_update_rewrites_row_and_redirects() {
        let state = AppState::for_tests().await;
        let pool = state.db_pool.clone().unwrap();
        let invoice = seed_invoice(&pool).await;

        let response = update_invoice(State(state), Path(invoice.id.clone()), Form(paid_form()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/dashboard/invoices"
        );

        let updated = get_invoice_by_id(&pool, &invoice.id).await.unwrap().unwrap();
        assert_eq!(updated.customer_id, "c2");
        assert_eq!(updated.amount, 2550);
        assert_eq!(updated.status, "paid");
        assert_eq!(updated.date, invoice.date);
    }

    #[tokio::test]
    async fn test_update_invalid_form_leaves_row_unchanged() {
        let state = AppState::for_tests().await;
        let pool = state.db_pool.clone().unwrap();
        let invoice = seed_invoice(&pool).await;

        let form = InvoiceForm {
            status: "overdue".to_string(),
            ..paid_form()
        };
        let response = update_invoice(State(state), Path(invoice.id.clone()), Form(form))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Missing Fields. Failed to Update Invoice.");

        let unchanged = get_invoice_by_id(&pool, &invoice.id).await.unwrap().unwrap();
        assert_eq!(unchanged.amount, 1000);
        assert_eq!(unchanged.status, "pending");
    }

    #[tokio::test]
    async fn test_update_unknown_id_still_redirects() {
        let state = AppState::for_tests().await;

        let response = update_invoice(
            State(state),
            Path("no-such-id".to_string()),
            Form(paid_form()),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_update_invalidates_cached_listing() {
        let state = AppState::for_tests().await;
        let pool = state.db_pool.clone().unwrap();
        let invoice = seed_invoice(&pool).await;
        state
            .page_cache
            .put(INVOICES_DASHBOARD_PATH, "stale body".to_string())
            .await;

        update_invoice(State(state.clone()), Path(invoice.id), Form(paid_form()))
            .await
            .unwrap();

        assert!(state.page_cache.get(INVOICES_DASHBOARD_PATH).await.is_none());
    }

    #[tokio::test]
    async fn test_update_database_failure_returns_message() {
        let state = AppState::for_tests().await;
        let pool = state.db_pool.clone().unwrap();
        pool.close().await;

        let response = update_invoice(State(state), Path("i1".to_string()), Form(paid_form()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Database Error: Failed to Update Invoice.");
    }
}
