/**
 * Invoice Storage
 *
 * Database access for invoice rows. Amounts are stored as integer minor
 * currency units (cents) and dates as ISO calendar dates ("YYYY-MM-DD"),
 * both already normalized by validation before they reach this module.
 *
 * The `customer_id` column is a plain TEXT reference with no foreign-key
 * constraint; writes never check that the customer exists.
 */
use chrono::Utc;
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::invoices::schema::InvoiceInput;

/// An invoice row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    /// Amount in minor currency units (cents)
    pub amount: i64,
    pub status: String,
    /// ISO calendar date, "YYYY-MM-DD"
    pub date: String,
}

/// An invoice row joined with its customer's name for the listing page
///
/// `customer_name` is `None` when the referenced customer does not exist,
/// which the data model permits.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct InvoiceListing {
    pub id: String,
    pub customer_id: String,
    pub customer_name: Option<String>,
    pub amount: i64,
    pub status: String,
    pub date: String,
}

/// Current UTC date, calendar portion only ("YYYY-MM-DD")
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Insert a new invoice
///
/// Generates the row id, stamps the date with the current UTC calendar
/// date, and returns the stored row.
pub async fn create_invoice(
    pool: &SqlitePool,
    input: &InvoiceInput,
) -> Result<Invoice, sqlx::Error> {
    let invoice = Invoice {
        id: Uuid::new_v4().to_string(),
        customer_id: input.customer_id.clone(),
        amount: input.amount,
        status: input.status.as_str().to_string(),
        date: today(),
    };

    sqlx::query(
        "INSERT INTO invoices (id, customer_id, amount, status, date) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&invoice.id)
    .bind(&invoice.customer_id)
    .bind(invoice.amount)
    .bind(&invoice.status)
    .bind(&invoice.date)
    .execute(pool)
    .await?;

    Ok(invoice)
}

/// Update an existing invoice's customer, amount, and status
///
/// The date column is left untouched. Updating an unknown id affects zero
/// rows and is not an error.
pub async fn update_invoice(
    pool: &SqlitePool,
    id: &str,
    input: &InvoiceInput,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE invoices SET customer_id = ?, amount = ?, status = ? WHERE id = ?")
        .bind(&input.customer_id)
        .bind(input.amount)
        .bind(input.status.as_str())
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete an invoice by id
///
/// Deleting an unknown id affects zero rows and is not an error.
pub async fn delete_invoice(pool: &SqlitePool, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM invoices WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Fetch a single invoice by id
pub async fn get_invoice_by_id(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<Invoice>, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(
        "SELECT id, customer_id, amount, status, date FROM invoices WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Fetch all invoices with customer names, newest first
pub async fn list_invoices(pool: &SqlitePool) -> Result<Vec<InvoiceListing>, sqlx::Error> {
    sqlx::query_as::<_, InvoiceListing>(
        r#"
        SELECT invoices.id, invoices.customer_id, customers.name AS customer_name,
               invoices.amount, invoices.status, invoices.date
        FROM invoices
        LEFT JOIN customers ON customers.id = invoices.customer_id
        ORDER BY invoices.date DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
