/**
 * Session Establishment and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions,
 * and the credential-verification flow that both login and signup delegate to.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::backend::auth::users::{get_user_by_email, User};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Errors raised while establishing a session
///
/// `InvalidCredentials` covers both an unknown email and a wrong password,
/// so callers cannot distinguish the two. `Database` failures are not
/// authentication failures and callers are expected to rethrow them.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// bcrypt could not verify the password against the stored hash
    #[error("password verification failed: {0}")]
    Verify(#[from] bcrypt::BcryptError),

    /// The session token could not be issued
    #[error("token issuance failed: {0}")]
    TokenIssuance(#[from] jsonwebtoken::errors::Error),

    /// The user lookup failed; not an authentication failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A successfully established session
#[derive(Debug)]
pub struct EstablishedSession {
    /// Signed JWT for subsequent requests
    pub token: String,
    /// The authenticated user row
    pub user: User,
}

/// Get JWT secret from environment
fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development fallback secret");
        "your-secret-key-change-in-production".to_string()
    })
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `user_id` - User ID (UUID string)
/// * `email` - User email
///
/// # Returns
/// JWT token string
pub fn create_token(user_id: &str, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    // Token expires in 30 days
    let exp = now + (30 * 24 * 60 * 60);

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp,
        iat: now,
    };

    let secret = get_jwt_secret();
    let key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a JWT token
///
/// # Arguments
/// * `token` - JWT token string
///
/// # Returns
/// Decoded claims or error
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = get_jwt_secret();
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Verify credentials and establish a session
///
/// Looks up the user by email, verifies the password against the stored
/// bcrypt hash, and issues a session token.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Submitted email
/// * `password` - Submitted plaintext password
///
/// # Returns
/// The session token and user row, or a categorized `AuthError`
pub async fn authenticate(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<EstablishedSession, AuthError> {
    let user = get_user_by_email(pool, email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let valid = bcrypt::verify(password, &user.password_hash)?;
    if !valid {
        return Err(AuthError::InvalidCredentials);
    }

    let token = create_token(&user.id, &user.email)?;

    Ok(EstablishedSession { token, user })
}
