/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate the submitted form fields against the signup schema
 * 2. Check if a user with this email already exists
 * 3. Hash the password using bcrypt
 * 4. Insert the user row
 * 5. Establish a session (the same flow login delegates to)
 * 6. Return token and user info
 *
 * # Validation
 *
 * Checks run in declaration order and the first failing message is the one
 * returned to the caller:
 * - Username must be at least 3 characters long
 * - Email must look like an address (local part, @, dotted domain)
 * - Password and confirmation must be at least 6 characters and equal
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at a fixed work factor
 * - Passwords are never returned in responses
 * - The email pre-check is best effort; the UNIQUE constraint on
 *   `users.email` backstops the race, and a constraint violation is
 *   reported with the same duplicate-user message
 */

use axum::{extract::State, response::Json, Form};
use bcrypt::hash;
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{AuthResponse, SignupForm, UserResponse};
use crate::backend::auth::sessions::authenticate;
use crate::backend::auth::users::{create_user, get_user_by_email, is_unique_violation, BCRYPT_COST};
use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// Validate email format
///
/// A valid address has a non-empty local part, exactly one `@`, a domain
/// containing a dot, and no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

/// Validate the signup form
///
/// Checks run in field declaration order; the first failure is returned
/// as a `ValidationError` carrying that field's message.
fn validate_signup(form: &SignupForm) -> Result<(), SharedError> {
    if form.user_name.len() < 3 {
        return Err(SharedError::validation(
            "userName",
            "Username must be at least 3 characters long.",
        ));
    }

    if !is_valid_email(&form.email) {
        return Err(SharedError::validation(
            "email",
            "Please enter a valid email address.",
        ));
    }

    if form.password.len() < 6 {
        return Err(SharedError::validation(
            "password",
            "Password must be at least 6 characters long.",
        ));
    }

    if form.confirm_password.len() < 6 {
        return Err(SharedError::validation(
            "confirmPassword",
            "Password must be at least 6 characters long.",
        ));
    }

    if form.password != form.confirm_password {
        return Err(SharedError::validation(
            "confirmPassword",
            "Passwords do not match.",
        ));
    }

    Ok(())
}

/// Sign up handler
///
/// This handler processes user registration requests. It validates the input,
/// creates a new user account, and establishes a session for immediate
/// authentication.
///
/// # Arguments
///
/// * `State(db_pool)` - Database connection pool extracted from app state
/// * `Form(form)` - Signup form fields
///
/// # Returns
///
/// JSON response with JWT token and user info, or an error status code
///
/// # Errors
///
/// * `400 Bad Request` - If a form field fails validation (first message wins)
/// * `409 Conflict` - If a user with this email already exists
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If hashing, the insert, or session
///   establishment fails; session-establishment errors propagate unhandled
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// userName=alice&email=alice%40example.com&password=secret123&confirmPassword=secret123
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
pub async fn signup(
    State(db_pool): State<Option<SqlitePool>>,
    Form(form): Form<SignupForm>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Some(pool) = db_pool.as_ref() else {
        tracing::error!("Database not configured");
        return Err(BackendError::service_unavailable("Database not configured"));
    };
    tracing::info!("Signup request for email: {}", form.email);

    validate_signup(&form).map_err(|err| {
        tracing::warn!("Signup form rejected: {}", err);
        err
    })?;

    // Check if email already exists
    if let Ok(Some(_)) = get_user_by_email(pool, &form.email).await {
        tracing::warn!("Email already registered: {}", form.email);
        return Err(BackendError::duplicate_user(
            "An account with this email already exists.",
        ));
    }

    // Hash password
    let password_hash = hash(&form.password, BCRYPT_COST)?;

    // Insert the user row. A concurrent registration that raced past the
    // email check lands here as a unique violation.
    if let Err(err) = create_user(
        pool,
        form.user_name.clone(),
        form.email.clone(),
        password_hash,
    )
    .await
    {
        if is_unique_violation(&err) {
            tracing::warn!("Email already registered (unique constraint): {}", form.email);
            return Err(BackendError::duplicate_user(
                "An account with this email already exists.",
            ));
        }
        tracing::error!("Failed to create user: {:?}", err);
        return Err(err.into());
    }

    // Establish the session through the same flow login uses.
    // Errors from this step propagate unhandled.
    let session = authenticate(pool, &form.email, &form.password).await?;

    tracing::info!(
        "User created successfully: {} ({})",
        session.user.name,
        session.user.email
    );

    Ok(Json(AuthResponse {
        token: session.token,
        user: UserResponse::from(session.user),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::verify_token;
    use crate::backend::server::state::AppState;
    use axum::http::StatusCode;

    async fn test_pool() -> SqlitePool {
        AppState::for_tests().await.db_pool.unwrap()
    }

    async fn count_users(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    fn valid_form() -> SignupForm {
        SignupForm {
            user_name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        }
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.org"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user @example.com"));
    }

    #[tokio::test]
    async fn test_signup_success_establishes_session() {
        let pool = test_pool().await;

        let response = signup(State(Some(pool.clone())), Form(valid_form()))
            .await
            .unwrap();

        assert!(!response.token.is_empty());
        assert_eq!(response.user.email, "alice@example.com");
        assert_eq!(response.user.name, "alice");

        // The token is a real session for the created user
        let claims = verify_token(&response.token).unwrap();
        assert_eq!(claims.sub, response.user.id);
        assert_eq!(count_users(&pool).await, 1);
    }

    #[tokio::test]
    async fn test_signup_stores_hash_not_plaintext() {
        let pool = test_pool().await;

        signup(State(Some(pool.clone())), Form(valid_form()))
            .await
            .unwrap();

        let stored = get_user_by_email(&pool, "alice@example.com")
            .await
            .unwrap()
            .expect("user should exist");
        assert_ne!(stored.password_hash, "secret123");
        assert!(bcrypt::verify("secret123", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_signup_short_username() {
        let pool = test_pool().await;

        let form = SignupForm {
            user_name: "al".to_string(),
            ..valid_form()
        };
        let err = signup(State(Some(pool.clone())), Form(form))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Username must be at least 3 characters long.");
        assert_eq!(count_users(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_signup_invalid_email() {
        let pool = test_pool().await;

        let form = SignupForm {
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        let err = signup(State(Some(pool.clone())), Form(form))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Please enter a valid email address.");
        assert_eq!(count_users(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_signup_short_password() {
        let pool = test_pool().await;

        let form = SignupForm {
            password: "short".to_string(),
            confirm_password: "short".to_string(),
            ..valid_form()
        };
        let err = signup(State(Some(pool.clone())), Form(form))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Password must be at least 6 characters long.");
        assert_eq!(count_users(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_signup_mismatched_passwords() {
        let pool = test_pool().await;

        let form = SignupForm {
            confirm_password: "different123".to_string(),
            ..valid_form()
        };
        let err = signup(State(Some(pool.clone())), Form(form))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Passwords do not match.");
        assert_eq!(count_users(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_signup_first_message_wins() {
        let pool = test_pool().await;

        // Everything is wrong; the username message comes first
        let form = SignupForm {
            user_name: "a".to_string(),
            email: "bad".to_string(),
            password: "x".to_string(),
            confirm_password: "y".to_string(),
        };
        let err = signup(State(Some(pool)), Form(form)).await.unwrap_err();

        assert_eq!(err.message(), "Username must be at least 3 characters long.");
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let pool = test_pool().await;

        signup(State(Some(pool.clone())), Form(valid_form()))
            .await
            .unwrap();

        let err = signup(State(Some(pool.clone())), Form(valid_form()))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.message(), "An account with this email already exists.");
        assert_eq!(count_users(&pool).await, 1);
    }

    #[tokio::test]
    async fn test_signup_no_database() {
        let err = signup(State(None), Form(valid_form())).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
