//! Invoice domain
//!
//! # Overview
//!
//! Everything invoice-shaped lives here: the shared form schema and its
//! validation, storage for invoice and customer rows, and the HTTP
//! handlers for the write operations plus the cached listing.
//!
//! # Module Structure
//!
//! ```text
//! invoices/
//! ├── mod.rs         - This file
//! ├── schema.rs      - Form fields, validation, minor-unit conversion
//! ├── store.rs       - Invoice rows and SQL access
//! ├── customers.rs   - Customer rows and SQL access
//! └── handlers/      - HTTP-facing create/update/delete/listing handlers
//! ```
//!
//! # Money
//!
//! Amounts enter as dollar strings from the browser and are stored as
//! integer minor currency units. The conversion happens exactly once, in
//! validation, so storage and handlers only ever see cents.

pub mod customers;
pub mod handlers;
pub mod schema;
pub mod store;

pub use customers::Customer;
pub use schema::{validate_invoice, InvoiceForm, InvoiceInput, InvoiceStatus};
pub use store::{Invoice, InvoiceListing};
