use serde::{Deserialize, Serialize};

use crate::calc::DEFAULT_DECIMALS;
use crate::db::DEFAULT_PRODUCTS_KEY;

/// Currency label shown next to amounts unless configured otherwise.
pub const DEFAULT_CURRENCY: &str = "ETB";

/// Where saved products are stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the store file (typically relative to the workspace root).
    pub path: String,
    /// Slot key holding the saved-products array.
    #[serde(default = "default_key")]
    pub key: String,
}

impl StoreConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), key: default_key() }
    }
}

fn default_key() -> String {
    DEFAULT_PRODUCTS_KEY.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_decimals() -> usize {
    DEFAULT_DECIMALS
}

/// Serializable configuration describing a calculator workspace.
///
/// This lives at `.unitcost/config.json` in the workspace root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Human-friendly workspace name.
    pub name: String,
    /// Config format version.
    pub config_version: String,
    pub store: StoreConfig,
    /// Label appended to displayed amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Decimals shown when displaying amounts. Stored values are never rounded.
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// Fail on malformed saved data instead of starting from an empty list.
    #[serde(default)]
    pub strict_load: bool,
}

impl WorkspaceConfig {
    /// Create a new workspace configuration using the given name and store path.
    pub fn new(name: impl Into<String>, store_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config_version: "0.1.0".to_string(),
            store: StoreConfig::new(store_path),
            currency: default_currency(),
            decimals: default_decimals(),
            strict_load: false,
        }
    }

    /// Render an amount with this workspace's precision and currency.
    pub fn format_amount(&self, value: f64) -> String {
        crate::calc::format_amount(value, self.decimals, &self.currency)
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self::new("unitcost", ".unitcost/store.db")
    }
}
