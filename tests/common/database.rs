//! Database test fixture
//!
//! Each test gets its own in-memory SQLite database with the application
//! schema applied, plus a router wired to it, so full request flows run
//! without external services.

use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use xfinvoice::backend::routes::create_router;
use xfinvoice::backend::server::config::init_schema;
use xfinvoice::backend::server::state::AppState;

use super::{body_json, form_request};

/// An application instance backed by a fresh in-memory database
///
/// The pool is capped at one connection because every connection to
/// `sqlite::memory:` opens its own database.
pub struct TestDatabase {
    pub pool: SqlitePool,
    pub state: AppState,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory database");
        init_schema(&pool).await.expect("schema init");

        let state = AppState::new(Some(pool.clone()));
        Self { pool, state }
    }

    /// A router sharing this fixture's pool and page cache
    pub fn app(&self) -> Router {
        create_router(self.state.clone())
    }

    /// Register a user through the API and return their session token
    pub async fn signup_user(&self, name: &str, email: &str, password: &str) -> String {
        let body = format!(
            "userName={name}&email={}&password={password}&confirmPassword={password}",
            email.replace('@', "%40"),
        );
        let response = self
            .app()
            .oneshot(form_request("POST", "/api/auth/signup", &body, None))
            .await
            .expect("signup request");
        assert!(
            response.status().is_success(),
            "signup failed: {}",
            response.status()
        );

        let json = body_json(response).await;
        json["token"].as_str().expect("token in response").to_string()
    }
}
