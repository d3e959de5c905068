//! Core data model: materials and saved products.
//!
//! Field names serialize in camelCase (`unitCost`) because that is the shape
//! of the persisted product blob.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh opaque identifier.
///
/// Random v4 UUID in simple (hex, no dashes) form.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// One cost-contributing input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    /// Cost of one unit of this material.
    pub unit_cost: f64,
    /// Share of the product made of this material, in percent.
    pub percentage: f64,
}

impl Material {
    /// Create a material with a freshly generated id.
    pub fn new(name: impl Into<String>, unit_cost: f64, percentage: f64) -> Self {
        Self { id: new_id(), name: name.into(), unit_cost, percentage }
    }

    /// Contribution of this line to the product cost.
    pub fn weighted_cost(&self) -> f64 {
        self.unit_cost * (self.percentage / 100.0)
    }
}

/// A named, saved snapshot of a computed total plus the materials behind it.
///
/// `cost` is frozen at save time and never written back; use
/// [`Product::recompute_cost`] to check it against `materials`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub materials: Vec<Material>,
}

impl Product {
    /// Snapshot `materials` under `name`, computing the cost from them.
    pub fn from_materials(name: impl Into<String>, materials: Vec<Material>) -> Self {
        let cost = crate::calc::total_cost(&materials);
        Self { id: new_id(), name: name.into(), cost, materials }
    }

    /// Recompute the cost from the stored materials.
    pub fn recompute_cost(&self) -> f64 {
        crate::calc::total_cost(&self.materials)
    }
}
