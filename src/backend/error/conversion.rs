/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be converted to HTTP responses.
 *
 * # HTTP Response Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers. The error is automatically converted to an
 * appropriate HTTP status code and response body.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::sessions::AuthError;
use crate::backend::error::types::BackendError;

impl From<AuthError> for BackendError {
    /// Convert a session-establishment failure into a backend error
    ///
    /// Invalid credentials become a 401 with the fixed user-facing string;
    /// the remaining causes map onto the corresponding backend variants so
    /// callers can propagate with `?`.
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                BackendError::unauthorized("Invalid credentials.")
            }
            AuthError::Verify(err) => BackendError::Hash(err),
            AuthError::TokenIssuance(err) => BackendError::Session(err),
            AuthError::Database(err) => BackendError::Database(err),
        }
    }
}

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// This implementation creates a JSON error response with the appropriate
    /// status code and error message. Server errors are logged with their
    /// full cause before the masked message is sent to the client.
    ///
    /// # Response Format
    ///
    /// The response is a JSON object with:
    /// - `error`: The error message
    /// - `status`: The HTTP status code
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Unexpected failures carry the real cause; log it here so the
        // masked client message is still diagnosable server-side.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {:?}", self);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
