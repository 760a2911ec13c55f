//! Backend Module
//!
//! This module contains all server-side code for the XFInvoice application.
//! It provides a complete Axum HTTP server with form handlers for
//! authentication and invoice management.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - Signup and login form handlers
//! - Invoice create/update/delete form handlers
//! - Route configuration and middleware
//! - Authentication and user management
//! - Page caching for the invoice listing
//! - Database persistence (SQLite)
//!
//! All code in this module runs on the server and handles HTTP requests.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration, page cache
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Authentication, JWT tokens, user management
//! - **`invoices`** - Invoice form handlers, validation schema, SQL operations
//! - **`middleware`** - Request processing middleware
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── invoices/       - Invoice handlers and storage
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! The backend uses shared state (`AppState`) that contains:
//! - Optional database pool (the server starts without one and reports 503)
//! - Page cache for rendered listing pages
//!
//! State is shared across all request handlers using `Arc` and `RwLock` for
//! thread-safe concurrent access. The database pool is internally reference
//! counted and cheap to clone.
//!
//! # Request Flow
//!
//! Form handlers follow the same three-step shape:
//!
//! 1. **Validate** the submitted fields against the handler's schema
//! 2. **Execute** the SQL statement for the operation
//! 3. **Respond** with a redirect on success or a structured error body
//!
//! Write handlers additionally invalidate the cached invoice listing page
//! before redirecting, so the next render reflects the change.
//!
//! # Thread Safety
//!
//! All backend code is designed for concurrent access:
//! - `Arc<RwLock<>>` for the page cache
//! - Axum handlers are `Send + Sync`
//! - Database pool is thread-safe
//!
//! # Error Handling
//!
//! The backend uses standard HTTP status codes and custom error types:
//! - `BackendError` for internal errors
//! - `StatusCode` for HTTP responses
//! - Proper error propagation with `?` operator
//!
//! # Example
//!
//! ```rust,no_run
//! use xfinvoice::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with Axum server
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Invoice handlers, schema validation, and SQL operations
pub mod invoices;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
pub use server::state::AppState;
