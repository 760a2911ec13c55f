//! Registration and login flows exercised through the router.

mod common;

use axum::http::StatusCode;
use tower::ServiceExt;

use common::database::TestDatabase;
use common::{body_json, form_request, get_request};

#[tokio::test]
async fn test_signup_login_me_flow() {
    let db = TestDatabase::new().await;

    // Register
    let signup = db
        .app()
        .oneshot(form_request(
            "POST",
            "/api/auth/signup",
            "userName=alice&email=alice%40example.com&password=secret123&confirmPassword=secret123",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(signup.status(), StatusCode::OK);
    let signup_body = body_json(signup).await;
    assert!(signup_body["token"].as_str().is_some());
    assert_eq!(signup_body["user"]["email"], "alice@example.com");

    // The stored credential is a hash, not the plaintext
    let stored_hash: String =
        sqlx::query_scalar("SELECT password_hash FROM users WHERE email = ?")
            .bind("alice@example.com")
            .fetch_one(&db.pool)
            .await
            .unwrap();
    assert_ne!(stored_hash, "secret123");

    // Log in with the same credentials
    let login = db
        .app()
        .oneshot(form_request(
            "POST",
            "/api/auth/login",
            "email=alice%40example.com&password=secret123",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);
    let token = body_json(login).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    // The token identifies the user
    let me = db
        .app()
        .oneshot(get_request("/api/auth/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(me.status(), StatusCode::OK);
    let me_body = body_json(me).await;
    assert_eq!(me_body["email"], "alice@example.com");
    assert_eq!(me_body["name"], "alice");
    assert!(me_body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_rejects_malformed_input_without_insert() {
    let db = TestDatabase::new().await;

    let cases = [
        (
            "userName=al&email=a%40b.com&password=secret123&confirmPassword=secret123",
            "Username must be at least 3 characters long.",
        ),
        (
            "userName=alice&email=nonsense&password=secret123&confirmPassword=secret123",
            "Please enter a valid email address.",
        ),
        (
            "userName=alice&email=a%40b.com&password=short&confirmPassword=short",
            "Password must be at least 6 characters long.",
        ),
        (
            "userName=alice&email=a%40b.com&password=secret123&confirmPassword=secret124",
            "Passwords do not match.",
        ),
    ];

    for (form, message) in cases {
        let response = db
            .app()
            .oneshot(form_request("POST", "/api/auth/signup", form, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "form: {form}");
        let body = body_json(response).await;
        assert_eq!(body["error"], message);
        assert_eq!(body["status"], 400);
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_signup_duplicate_email_conflict() {
    let db = TestDatabase::new().await;
    db.signup_user("alice", "alice@example.com", "secret123")
        .await;

    let response = db
        .app()
        .oneshot(form_request(
            "POST",
            "/api/auth/signup",
            "userName=other&email=alice%40example.com&password=different1&confirmPassword=different1",
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"], "An account with this email already exists.");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let db = TestDatabase::new().await;
    db.signup_user("alice", "alice@example.com", "secret123")
        .await;

    let response = db
        .app()
        .oneshot(form_request(
            "POST",
            "/api/auth/login",
            "email=alice%40example.com&password=wrongpass",
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid credentials.");
}

#[tokio::test]
async fn test_me_without_token() {
    let db = TestDatabase::new().await;

    let response = db
        .app()
        .oneshot(get_request("/api/auth/me", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
