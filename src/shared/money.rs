//! Monetary Conversion Helpers
//!
//! Invoice amounts are entered as dollar values on the form but stored as
//! integer cents in the database. Storing cents avoids floating point
//! rounding in arithmetic and comparisons once the value is persisted.

/// Convert a dollar amount to integer cents.
///
/// Rounds half away from zero, so `10.555` becomes `1056` cents.
///
/// # Arguments
///
/// * `dollars` - The amount in dollars as parsed from the form
///
/// # Returns
///
/// The amount in cents
pub fn dollars_to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}
