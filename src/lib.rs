//! XFInvoice - Main Library
//!
//! XFInvoice is the server side of a small invoicing application. It exposes
//! form handlers for user registration and login, and create/update/delete
//! operations on invoice records, each backed by direct SQL statements and
//! schema validation over the submitted form fields.
//!
//! # Overview
//!
//! This library provides:
//! - Signup and login handlers with bcrypt password hashing and JWT sessions
//! - Invoice create/update/delete handlers with per-field validation results
//! - A cached invoice listing page that write handlers invalidate by path
//! - SQLite persistence through sqlx with an idempotent startup schema
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types usable by any caller of the library
//!   - Error types
//!   - Currency conversion helpers
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server setup, routes, and middleware
//!   - Authentication, user management, and session tokens
//!   - Invoice form handlers, validation schema, and SQL operations
//!   - Page cache for the rendered invoice listing
//!
//! # Usage
//!
//! ```rust,no_run
//! use xfinvoice::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with Axum server
//! # }
//! ```

/// Types shared across the library: errors, money conversion
pub mod shared;

/// Server-side code: HTTP handlers, persistence, sessions
pub mod backend;
