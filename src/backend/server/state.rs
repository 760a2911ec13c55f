/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` trait for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - Optional database connection pool
 * - The page cache for rendered listing bodies
 *
 * # Thread Safety
 *
 * All state is designed to be thread-safe:
 * - `SqlitePool` is internally reference-counted and clonable
 * - `PageCache` is an `Arc<RwLock<..>>` handle; clones share contents
 * - `Option<T>` for the database, which may not be configured
 *
 * # State Extraction
 *
 * The `FromRef` implementation allows handlers that only touch the
 * database to extract `Option<SqlitePool>` directly instead of the whole
 * `AppState`. Handlers that also invalidate or serve cached pages take
 * the full state.
 *
 * # Example
 *
 * ```rust
 * use xfinvoice::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     if state.db_pool.is_none() {
 *         // Database features disabled
 *     }
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::server::cache::PageCache;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `db_pool` - Optional SQLite connection pool; `None` if the database
///   is not configured (e.g. `DATABASE_URL` unset). Handlers check for
///   `None` before using the database.
/// * `page_cache` - Cache of rendered page bodies, keyed by request path
#[derive(Clone)]
pub struct AppState {
    pub db_pool: Option<SqlitePool>,
    pub page_cache: PageCache,
}

impl AppState {
    /// Build the state around an optional database pool with an empty cache
    pub fn new(db_pool: Option<SqlitePool>) -> Self {
        Self {
            db_pool,
            page_cache: PageCache::new(),
        }
    }
}

/// Implement FromRef for Option<SqlitePool>
///
/// This allows Axum handlers to extract the optional database pool
/// directly from `AppState` using `State(db_pool): State<Option<SqlitePool>>`.
impl FromRef<AppState> for Option<SqlitePool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

#[cfg(test)]
impl AppState {
    /// State backed by a fresh in-memory database with the schema applied
    ///
    /// The pool is capped at one connection: every connection to
    /// `sqlite::memory:` opens its own database, so a second connection
    /// would not see the applied schema.
    pub async fn for_tests() -> Self {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory database");
        crate::backend::server::config::init_schema(&pool)
            .await
            .expect("schema init");
        Self::new(Some(pool))
    }

    /// State with no database configured
    pub fn without_database() -> Self {
        Self::new(None)
    }
}
