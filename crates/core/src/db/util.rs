use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::db::{SqliteStore, WorkspaceConfig, WorkspaceLayout};

/// Load the workspace config JSON from disk for a given layout.
pub fn load_workspace_config(layout: &WorkspaceLayout) -> Result<WorkspaceConfig> {
    let config_json = std::fs::read_to_string(&layout.config_path).with_context(|| {
        format!("Failed to read workspace config at {}", layout.config_path.display())
    })?;
    let config: WorkspaceConfig =
        serde_json::from_str(&config_json).context("Failed to parse workspace config JSON")?;
    Ok(config)
}

/// Write the workspace config JSON for a given layout.
pub fn write_workspace_config(layout: &WorkspaceLayout, config: &WorkspaceConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&layout.config_path, json).with_context(|| {
        format!("Failed to write workspace config: {}", layout.config_path.display())
    })?;
    Ok(())
}

/// Resolve the store path (respecting relative/absolute config) and open it.
pub fn open_workspace_store(
    layout: &WorkspaceLayout,
) -> Result<(WorkspaceConfig, PathBuf, SqliteStore)> {
    let config = load_workspace_config(layout)?;
    let store_path = layout.resolve(&config.store.path);
    let store = SqliteStore::open(&store_path)
        .with_context(|| format!("Failed to open product store at {}", store_path.display()))?;
    Ok((config, store_path, store))
}
