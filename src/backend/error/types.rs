/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Domain Failures
 *
 * Expected failures with fixed user-facing strings:
 * - Duplicate user on registration
 * - Invalid or missing credentials
 * - Missing records
 *
 * ## Infrastructure Failures
 *
 * Unexpected failures from collaborators, surfaced with generic messages
 * while the underlying cause is logged server-side:
 * - Database statements
 * - Password hashing
 * - Session token issuance and verification
 *
 * ## Shared Errors
 *
 * Validation and serialization errors from the shared module, wrapped
 * transparently so handlers can propagate them with `?`.
 */

use crate::shared::SharedError;
use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant includes relevant context and can be converted to an HTTP response.
///
/// # Usage
///
/// ```rust
/// use xfinvoice::backend::error::BackendError;
///
/// // Expected domain failures
/// let err = BackendError::duplicate_user("An account with this email already exists.");
/// let err = BackendError::unauthorized("Invalid credentials.");
///
/// // Generic authentication failure
/// let err = BackendError::auth("Something went wrong.");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Shared error (from shared module)
    ///
    /// This error wraps errors from the shared module, such as
    /// serialization errors or validation errors.
    #[error(transparent)]
    Shared(#[from] SharedError),

    /// A registration attempt for an email that already has an account
    #[error("Duplicate user: {message}")]
    DuplicateUser {
        /// Human-readable error message
        message: String,
    },

    /// Missing or invalid credentials
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// A categorized authentication failure that is not a credentials problem
    ///
    /// Session establishment can fail for reasons other than bad credentials
    /// (hash verification errors, token issuance errors). Those are collapsed
    /// to a generic user-facing message.
    #[error("Authentication failure: {message}")]
    Auth {
        /// Human-readable error message
        message: String,
    },

    /// A record that was expected to exist is missing
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Database statement failure
    ///
    /// The underlying cause is logged; callers only see a generic message.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failure
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Session token issuance or verification failure
    #[error("Session token error: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),

    /// Serialization error
    ///
    /// This error occurs when serializing or deserializing data fails.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required service (the database) is not configured
    #[error("Service unavailable: {message}")]
    ServiceUnavailable {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new duplicate-user error
    ///
    /// # Arguments
    ///
    /// * `message` - Error message
    pub fn duplicate_user(message: impl Into<String>) -> Self {
        Self::DuplicateUser {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    ///
    /// # Arguments
    ///
    /// * `message` - Error message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new generic authentication-failure error
    ///
    /// # Arguments
    ///
    /// * `message` - Error message
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    ///
    /// # Arguments
    ///
    /// * `message` - Error message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new service-unavailable error
    ///
    /// # Arguments
    ///
    /// * `message` - Error message
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Shared` validation - 400 Bad Request
    /// - `Shared` serialization - 500 Internal Server Error
    /// - `DuplicateUser` - 409 Conflict
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Auth` - 500 Internal Server Error
    /// - `NotFound` - 404 Not Found
    /// - `Database` / `Hash` / `Session` / `Serialization` - 500 Internal Server Error
    /// - `ServiceUnavailable` - 503 Service Unavailable
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Shared(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::DuplicateUser { .. } => StatusCode::CONFLICT,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Auth { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the user-facing error message
    ///
    /// Infrastructure failures mask the underlying cause; the real error is
    /// only written to the server log.
    pub fn message(&self) -> String {
        match self {
            Self::Shared(err) => err.user_message(),
            Self::DuplicateUser { message } => message.clone(),
            Self::Unauthorized { message } => message.clone(),
            Self::Auth { message } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::Database(_) => "Database error".to_string(),
            Self::Hash(_) => "Server error".to_string(),
            Self::Session(_) => "Server error".to_string(),
            Self::Serialization(err) => err.to_string(),
            Self::ServiceUnavailable { message } => message.clone(),
        }
    }
}
