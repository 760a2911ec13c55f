//! Invoice HTTP handlers
//!
//! Write handlers (create, update, delete) share the validate → persist →
//! invalidate-cache flow; the listing and customer handlers are reads, with
//! the listing served through the page cache.

pub mod create;
pub mod customers;
pub mod delete;
pub mod listing;
pub mod types;
pub mod update;

pub use create::create_invoice;
pub use customers::list_customers;
pub use delete::delete_invoice;
pub use listing::invoice_listing;
pub use update::update_invoice;

/// Route serving the cached invoice listing; write handlers invalidate
/// this path after every mutation.
pub const INVOICES_DASHBOARD_PATH: &str = "/dashboard/invoices";
