//! Shared Module
//!
//! This module contains types and helpers that are not tied to the HTTP
//! layer and can be used by any caller of the library: error types and
//! the currency conversion used when normalizing invoice amounts.

/// Error types
pub mod error;

/// Currency conversion helpers
pub mod money;

// Re-export commonly used types
pub use error::SharedError;
pub use money::dollars_to_cents;
