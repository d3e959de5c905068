use std::path::Path;

use anyhow::{anyhow, Result};
use unitcost_core::db::{WorkspaceConfig, WorkspaceContext, WorkspaceLayout};

use crate::canonicalize_or_current;

/// Open the workspace at `root` and hydrate its calculator.
pub fn open_context(root: &str) -> Result<WorkspaceContext> {
    let root_path = canonicalize_or_current(root)?;
    WorkspaceContext::from_root(&root_path)
}

/// Workspace config for display purposes; defaults when `root` is not a workspace.
pub fn display_config(root: &str) -> Result<WorkspaceConfig> {
    let root_path = canonicalize_or_current(root)?;
    let layout = WorkspaceLayout::new(&root_path);
    if layout.config_path.is_file() {
        unitcost_core::db::load_workspace_config(&layout)
    } else {
        Ok(WorkspaceConfig::default())
    }
}

/// Resolve a full id or unique id prefix against `ids`.
pub fn resolve_id<'a>(
    kind: &str,
    query: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<String> {
    let query = query.trim();
    if query.is_empty() {
        return Err(anyhow!("{kind} id is required"));
    }
    let mut matches = Vec::new();
    for id in ids {
        if id == query {
            return Ok(id.to_string());
        }
        if id.starts_with(query) {
            matches.push(id);
        }
    }
    match matches.as_slice() {
        [only] => Ok(only.to_string()),
        [] => Err(anyhow!("No {kind} matches id '{query}'")),
        many => Err(anyhow!("Id '{query}' is ambiguous: matches {} {kind}s", many.len())),
    }
}

/// Helper to print whether a path exists.
pub fn print_path_status(label: &str, path: &Path) {
    let exists = path.exists();
    println!("- {label}: {} ({})", if exists { "OK" } else { "MISSING" }, path.display());
}
