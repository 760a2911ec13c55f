/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header before the handler runs.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::verify_token;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT token from the Authorization header
/// 2. Verifies the token
/// 3. Checks that the token's user still exists in the database
///
/// Returns 401 Unauthorized if the token is missing, invalid, or refers
/// to a deleted user.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized("Missing authorization header")
        })?;

    // Header format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::unauthorized("Invalid authorization header")
    })?;

    let claims = verify_token(token).map_err(|err| {
        tracing::warn!("Invalid token: {:?}", err);
        BackendError::unauthorized("Invalid token")
    })?;

    // Tokens outlive accounts; reject ones whose user row is gone
    if let Some(pool) = &state.db_pool {
        let user = get_user_by_id(pool, &claims.sub)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Token for deleted user {}", claims.sub);
                BackendError::unauthorized("Invalid token")
            })?;
        tracing::debug!("Authenticated request from {}", user.email);
    }

    Ok(next.run(request).await)
}
