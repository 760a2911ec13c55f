/**
 * Customer Storage
 *
 * Read-mostly access to the customers table. Customers back the invoice
 * form's selector; invoice writes reference them by id without checking
 * existence.
 */
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

/// A customer row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Fetch all customers ordered by name
pub async fn get_customers(pool: &SqlitePool) -> Result<Vec<Customer>, sqlx::Error> {
    sqlx::query_as::<_, Customer>("SELECT id, name, email FROM customers ORDER BY name")
        .fetch_all(pool)
        .await
}

/// Insert a customer and return the stored row
pub async fn create_customer(
    pool: &SqlitePool,
    name: String,
    email: String,
) -> Result<Customer, sqlx::Error> {
    let customer = Customer {
        id: Uuid::new_v4().to_string(),
        name,
        email,
    };

    sqlx::query("INSERT INTO customers (id, name, email) VALUES (?, ?, ?)")
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .execute(pool)
        .await?;

    Ok(customer)
}
