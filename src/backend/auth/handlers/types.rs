/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across signup, login, and get_me handlers.
 *
 * Request types deserialize browser-submitted form fields. Field names on the
 * wire are camelCase, and missing fields materialize as empty strings so the
 * validation step (not deserialization) produces the user-facing message.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Signup form fields
///
/// Submitted by the registration form. All fields default to empty strings
/// when absent.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    /// Display name (at least 3 characters)
    pub user_name: String,
    /// Email address
    pub email: String,
    /// Password (at least 6 characters, hashed before storage)
    pub password: String,
    /// Password confirmation (must equal `password`)
    pub confirm_password: String,
}

/// Login form fields
///
/// Submitted by the login form. Credential checking is delegated entirely
/// to session establishment, so no schema is applied here.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoginForm {
    /// Email address
    pub email: String,
    /// Password (verified against the stored hash)
    pub password: String,
}

/// Auth response
///
/// Returned by signup and login handlers. Contains the JWT token
/// and user information for immediate authentication.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    /// JWT token for authentication (30-day expiration)
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash.
#[derive(Serialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's display name
    pub name: String,
    /// User's email address
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_form_uses_camel_case_field_names() {
        let form: SignupForm = serde_json::from_str(
            r#"{"userName":"alice","email":"alice@example.com","password":"secret123","confirmPassword":"secret123"}"#,
        )
        .unwrap();

        assert_eq!(form.user_name, "alice");
        assert_eq!(form.email, "alice@example.com");
        assert_eq!(form.password, "secret123");
        assert_eq!(form.confirm_password, "secret123");
    }

    #[test]
    fn test_missing_signup_fields_default_to_empty() {
        let form: SignupForm = serde_json::from_str(r#"{"email":"alice@example.com"}"#).unwrap();

        assert_eq!(form.user_name, "");
        assert_eq!(form.email, "alice@example.com");
        assert_eq!(form.password, "");
        assert_eq!(form.confirm_password, "");
    }

    #[test]
    fn test_user_response_drops_password_hash() {
        let user = User {
            id: "id-1".to_string(),
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "secret-hash".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("alice@example.com"));
    }
}
