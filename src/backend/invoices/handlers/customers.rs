/**
 * Customer Listing Handler
 *
 * GET /api/customers, backing the invoice form's customer selector.
 */
use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::invoices::customers::{get_customers, Customer};

/// Customer listing handler
///
/// Returns all customers ordered by name.
pub async fn list_customers(
    State(db_pool): State<Option<SqlitePool>>,
) -> Result<Json<Vec<Customer>>, BackendError> {
    let Some(pool) = db_pool.as_ref() else {
        tracing::error!("Database not configured");
        return Err(BackendError::service_unavailable("Database not configured"));
    };

    let customers = get_customers(pool).await?;
    Ok(Json(customers))
}
