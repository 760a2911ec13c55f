//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! The routes module is organized into focused submodules:
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - Route registration, split public vs. protected
//!
//! # Route Organization
//!
//! Public authentication routes are merged first, then the invoice routes
//! wrapped in the bearer-token middleware, then the 404 fallback. The
//! trace layer wraps the whole router.

pub mod api_routes;
pub mod router;

pub use router::create_router;
