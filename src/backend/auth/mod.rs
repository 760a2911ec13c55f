//! User accounts and session establishment
//!
//! # Overview
//!
//! This module owns everything account-shaped: the `users` table access
//! layer, bcrypt password hashing, JWT issuance and verification, and the
//! HTTP handlers for signup, login, and the current-user endpoint.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs        - This file
//! ├── users.rs      - User model and database access
//! ├── sessions.rs   - JWT claims, token lifecycle, credential checks
//! └── handlers/     - HTTP-facing signup/login/me handlers
//! ```
//!
//! # Session Model
//!
//! Sessions are stateless JWTs signed with HS256. A successful signup or
//! login returns a token valid for 30 days; protected routes verify it on
//! every request.

pub mod handlers;
pub mod sessions;
pub mod users;

pub use sessions::{authenticate, create_token, verify_token, AuthError, Claims};
pub use users::User;
