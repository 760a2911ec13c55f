/**
 * Invoice Form Schema
 *
 * This module defines the form schema shared by the invoice create and
 * update handlers, and the validation that turns raw form fields into a
 * storage-ready payload.
 *
 * # Validation Model
 *
 * Browser form fields arrive string-keyed and string-valued, so every field
 * starts as a string and is checked (and coerced) here. Unlike the signup
 * flow, which stops at the first failing check, invoice validation collects
 * every failure into a field-keyed map so the form can annotate each input.
 *
 * # Field Rules
 *
 * | Field      | Rule                           | Message                                    |
 * |------------|--------------------------------|--------------------------------------------|
 * | customerId | non-empty                      | "Please select a customer."                |
 * | amount     | coerces to a number, > 0       | "Please enter an amount greater than $0."  |
 * | status     | one of `pending`, `paid`       | "Please select an invoice status."         |
 */
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::money::dollars_to_cents;

/// Raw invoice form fields as submitted by the browser
///
/// Field names follow the wire convention (`customerId`), mapped onto
/// snake_case here. Missing fields default to empty strings so incomplete
/// submissions reach validation instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceForm {
    pub customer_id: String,
    pub amount: String,
    pub status: String,
}

/// Invoice lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// The wire/storage spelling of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }
}

/// A validated invoice payload in storage form
///
/// Produced only by [`validate_invoice`]; the amount has already been
/// converted to integer minor currency units.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceInput {
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
}

/// Per-field validation failures, keyed by wire field name
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Validate raw invoice form fields
///
/// Checks every field and collects all failures rather than stopping at the
/// first, so the caller can annotate each form input. On success the amount
/// is converted from dollars to integer minor units.
///
/// # Errors
///
/// A map from wire field name (`customerId`, `amount`, `status`) to the
/// list of messages for that field.
pub fn validate_invoice(form: &InvoiceForm) -> Result<InvoiceInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    if form.customer_id.is_empty() {
        errors
            .entry("customerId".to_string())
            .or_default()
            .push("Please select a customer.".to_string());
    }

    let amount = match form.amount.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        _ => {
            errors
                .entry("amount".to_string())
                .or_default()
                .push("Please enter an amount greater than $0.".to_string());
            None
        }
    };

    let status = match InvoiceStatus::parse(&form.status) {
        Some(status) => Some(status),
        None => {
            errors
                .entry("status".to_string())
                .or_default()
                .push("Please select an invoice status.".to_string());
            None
        }
    };

    match (amount, status) {
        (Some(amount), Some(status)) if errors.is_empty() => Ok(InvoiceInput {
            customer_id: form.customer_id.clone(),
            amount: dollars_to_cents(amount),
            status,
        }),
        _ => Err(errors),
    }
}
