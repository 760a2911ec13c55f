/**
 * Invoice Handler Types
 *
 * Response shapes for the invoice write handlers. Failures are returned as
 * data rather than thrown: validation failures carry a field-keyed error
 * map plus a summary message, database failures carry only the message.
 */
use serde::{Deserialize, Serialize};

use crate::backend::invoices::schema::FieldErrors;

/// A recoverable invoice form outcome, displayed by the caller
///
/// # Serialized Shapes
///
/// Validation failure:
///
/// ```json
/// {
///   "errors": { "amount": ["Please enter an amount greater than $0."] },
///   "message": "Missing Fields. Failed to Create Invoice."
/// }
/// ```
///
/// Database failure or delete acknowledgement (no field errors):
///
/// ```json
/// { "message": "Database Error: Failed to Create Invoice." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InvoiceFormState {
    #[serde(skip_serializing_if = "FieldErrors::is_empty", default)]
    pub errors: FieldErrors,
    pub message: String,
}

impl InvoiceFormState {
    /// A validation failure with per-field messages
    pub fn validation(errors: FieldErrors, message: &str) -> Self {
        Self {
            errors,
            message: message.to_string(),
        }
    }

    /// A message-only outcome with no field errors
    pub fn message(message: &str) -> Self {
        Self {
            errors: FieldErrors::new(),
            message: message.to_string(),
        }
    }
}
