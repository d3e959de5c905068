//! unitcost-core
//!
//! Core library for the unit-cost calculator.
//!
//! This crate defines the data model (materials and saved products), the
//! weighted cost calculation, entry validation, the calculator state store,
//! and the key-value persistence layer that keeps saved products across runs.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (the CLI today, anything else later).

pub mod model;
pub mod calc;
pub mod entry;
pub mod store;
pub mod db;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
