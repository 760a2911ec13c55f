/**
 * Current User Handler
 *
 * This module implements the authenticated user info handler for
 * GET /api/auth/me.
 *
 * # Authentication
 *
 * The handler extracts a JWT from the Authorization header (Bearer scheme),
 * verifies it, and loads the corresponding user row. A valid token whose
 * user no longer exists returns 404.
 */
use axum::{extract::State, http::HeaderMap, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::sessions::verify_token;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;

/// Current user handler
///
/// Returns the profile of the user identified by the bearer token.
///
/// # Arguments
///
/// * `State(db_pool)` - Database connection pool extracted from app state
/// * `headers` - Request headers (Authorization: Bearer <token>)
///
/// # Errors
///
/// * `401 Unauthorized` - Missing header, malformed header, or invalid token
/// * `404 Not Found` - Token is valid but the user row no longer exists
/// * `503 Service Unavailable` - If the database is not configured
pub async fn me(
    State(db_pool): State<Option<SqlitePool>>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, BackendError> {
    let Some(pool) = db_pool.as_ref() else {
        tracing::error!("Database not configured");
        return Err(BackendError::service_unavailable("Database not configured"));
    };

    let auth_header = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| BackendError::unauthorized("Missing authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| BackendError::unauthorized("Invalid authorization header"))?;

    let claims = verify_token(token).map_err(|err| {
        tracing::warn!("Token verification failed: {}", err);
        BackendError::unauthorized("Invalid token")
    })?;

    let user = get_user_by_id(pool, &claims.sub)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    Ok(Json(UserResponse::from(user)))
}
