//! Authentication HTTP handlers
//!
//! Form-driven signup and login plus the bearer-token `me` endpoint.
//! Shared request/response types live in [`types`].

pub mod login;
pub mod me;
pub mod signup;
pub mod types;

pub use login::login;
pub use me::me;
pub use signup::signup;
