use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::db::{
    open_workspace_store, ProductRepository, SqliteStore, WorkspaceConfig, WorkspaceLayout,
};
use crate::store::Calculator;

/// Convenience wrapper bundling layout, config, store path, and a hydrated calculator.
#[derive(Debug)]
pub struct WorkspaceContext {
    pub layout: WorkspaceLayout,
    pub config: WorkspaceConfig,
    pub store_path: PathBuf,
    pub calculator: Calculator<SqliteStore>,
}

impl WorkspaceContext {
    /// Load the workspace config, open the store and load saved products.
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self> {
        let layout = WorkspaceLayout::new(root);
        let (config, store_path, store) = open_workspace_store(&layout)?;
        let repository = ProductRepository::with_key(store, config.store.key.clone());
        let calculator = Calculator::open(repository, config.strict_load).with_context(|| {
            format!("Failed to load saved products from {}", store_path.display())
        })?;
        Ok(Self { layout, config, store_path, calculator })
    }

    /// Render an amount with this workspace's display settings.
    pub fn format_amount(&self, value: f64) -> String {
        self.config.format_amount(value)
    }
}
