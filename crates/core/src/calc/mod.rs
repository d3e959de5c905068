//! Weighted cost calculation and display formatting.
//!
//! Totals are plain `f64` sums with no intermediate rounding. Rounding only
//! happens in the `format_*` helpers, which never feed back into stored values.

use crate::model::Material;

/// Default number of decimals used when rendering amounts.
pub const DEFAULT_DECIMALS: usize = 2;

/// Sum of `unit_cost * percentage / 100` over `materials`.
///
/// An empty slice yields `0.0`.
pub fn total_cost(materials: &[Material]) -> f64 {
    materials.iter().fold(0.0, |total, material| total + material.weighted_cost())
}

/// Render `value` rounded to `decimals` places.
pub fn format_cost(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Render `value` with a trailing currency label, e.g. `52.00 ETB`.
///
/// An empty label renders just the number.
pub fn format_amount(value: f64, decimals: usize, currency: &str) -> String {
    let number = format_cost(value, decimals);
    if currency.is_empty() {
        number
    } else {
        format!("{number} {currency}")
    }
}
