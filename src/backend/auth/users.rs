/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// bcrypt work factor for password hashing
pub const BCRYPT_COST: u32 = 10;

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID, stored as TEXT)
    pub id: String,
    /// Display name (at least 3 characters)
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - User's display name
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &SqlitePool,
    name: String,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&name)
    .bind(&email)
    .bind(&password_hash)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(User {
        id,
        name,
        email,
        password_hash,
        created_at: now,
        updated_at: now,
    })
}

/// Get user by email
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id` - User ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Check whether a database error is a unique-constraint violation
///
/// The registration handler checks for an existing email before inserting,
/// but the check and the insert are not one transaction. The UNIQUE
/// constraint on `users.email` is the backstop for that race, and this
/// helper lets the handler translate the constraint error into the same
/// duplicate-user message the pre-check produces.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::state::AppState;

    #[tokio::test]
    async fn test_create_and_fetch_by_email() {
        let state = AppState::for_tests().await;
        let pool = state.db_pool.unwrap();

        let created = create_user(
            &pool,
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hashed-password".to_string(),
        )
        .await
        .unwrap();

        let fetched = get_user_by_email(&pool, "alice@example.com")
            .await
            .unwrap()
            .expect("user should exist");

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "alice");
        assert_eq!(fetched.email, "alice@example.com");
        assert_eq!(fetched.password_hash, "hashed-password");
    }

    #[tokio::test]
    async fn test_fetch_unknown_email_returns_none() {
        let state = AppState::for_tests().await;
        let pool = state.db_pool.unwrap();

        let user = get_user_by_email(&pool, "nobody@example.com").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_fetch_by_id() {
        let state = AppState::for_tests().await;
        let pool = state.db_pool.unwrap();

        let created = create_user(
            &pool,
            "bob".to_string(),
            "bob@example.com".to_string(),
            "hash".to_string(),
        )
        .await
        .unwrap();

        let fetched = get_user_by_id(&pool, &created.id)
            .await
            .unwrap()
            .expect("user should exist");
        assert_eq!(fetched.email, "bob@example.com");

        let missing = get_user_by_id(&pool, "not-a-real-id").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let state = AppState::for_tests().await;
        let pool = state.db_pool.unwrap();

        create_user(
            &pool,
            "first".to_string(),
            "taken@example.com".to_string(),
            "hash".to_string(),
        )
        .await
        .unwrap();

        let err = create_user(
            &pool,
            "second".to_string(),
            "taken@example.com".to_string(),
            "hash".to_string(),
        )
        .await
        .unwrap_err();

        assert!(is_unique_violation(&err));
    }

    #[test]
    fn test_other_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }
}
