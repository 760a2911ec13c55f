//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server. It provides the foundation for the application's
//! backend infrastructure.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`state`** - Application state structure and `FromRef` implementation
//! - **`cache`** - Page cache for rendered listing bodies
//! - **`config`** - Configuration loading and validation
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementation
//! ├── cache.rs        - PageCache
//! ├── config.rs       - Configuration loading (database, port)
//! ├── schema.sql      - Idempotent application schema
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: Loads the database from `DATABASE_URL`
//! 2. **State Creation**: Creates the app state with an empty page cache
//! 3. **Router Creation**: Configures all routes and middleware
//!
//! # Example
//!
//! ```rust,no_run
//! use xfinvoice::backend::server::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod init;
pub mod state;

pub use cache::PageCache;
pub use config::{load_database, server_port};
pub use init::create_app;
pub use state::AppState;
