/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * Credential verification is delegated entirely to session establishment
 * (`authenticate`): user lookup by email, bcrypt verification, token
 * issuance. This handler only maps the failure categories to user-facing
 * strings:
 *
 * - invalid credentials map to a fixed string
 * - any other categorized authentication failure maps to a generic string
 * - non-authentication failures (the database) are rethrown, not swallowed
 *
 * # Security
 *
 * - Unknown email and wrong password return the same response (no
 *   information leakage)
 * - Passwords are never logged or returned in responses
 */
use axum::{extract::State, response::Json, Form};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{AuthResponse, LoginForm, UserResponse};
use crate::backend::auth::sessions::{authenticate, AuthError};
use crate::backend::error::BackendError;

/// Login handler
///
/// This handler processes user authentication requests. It verifies the
/// email and password, and returns a JWT token if authentication succeeds.
///
/// # Arguments
///
/// * `State(db_pool)` - Database connection pool extracted from app state
/// * `Form(form)` - Login form fields
///
/// # Returns
///
/// JSON response with JWT token and user info, or an error status code
///
/// # Errors
///
/// * `401 Unauthorized` - If the user is not found or the password is wrong
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If verification or token issuance fails
///   ("Something went wrong."), or a database failure is rethrown
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// email=alice%40example.com&password=secret123
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "name": "alice",
///     "email": "alice@example.com"
///   }
/// }
/// ```
pub async fn login(
    State(db_pool): State<Option<SqlitePool>>,
    Form(form): Form<LoginForm>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Some(pool) = db_pool.as_ref() else {
        tracing::error!("Database not configured");
        return Err(BackendError::service_unavailable("Database not configured"));
    };
    tracing::info!("Login request for: {}", form.email);

    let session = match authenticate(pool, &form.email, &form.password).await {
        Ok(session) => session,
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Invalid credentials for: {}", form.email);
            return Err(BackendError::unauthorized("Invalid credentials."));
        }
        // Not an authentication failure; rethrown rather than swallowed
        Err(AuthError::Database(err)) => return Err(err.into()),
        Err(err) => {
            tracing::error!("Authentication failure: {:?}", err);
            return Err(BackendError::auth("Something went wrong."));
        }
    };

    tracing::info!(
        "User logged in successfully: {} ({})",
        session.user.name,
        session.user.email
    );

    Ok(Json(AuthResponse {
        token: session.token,
        user: UserResponse::from(session.user),
    }))
}
