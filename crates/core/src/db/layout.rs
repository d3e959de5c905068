use std::path::{Path, PathBuf};

/// Logical layout of a calculator workspace on disk.
///
/// This is derived from a chosen root path. It does *not* perform any IO itself.
/// The CLI or other frontends are responsible for actually creating directories
/// and files based on this layout.
#[derive(Debug, Clone)]
pub struct WorkspaceLayout {
    /// Root directory of the workspace.
    pub root: PathBuf,
    /// Directory for internal metadata (.unitcost).
    pub meta_dir: PathBuf,
    /// Path to the workspace config file (JSON).
    pub config_path: PathBuf,
    /// Default path of the key-value store file.
    pub store_path: PathBuf,
}

impl WorkspaceLayout {
    /// Compute the default layout for a workspace rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let meta_dir = root.join(".unitcost");
        let config_path = meta_dir.join("config.json");
        let store_path = meta_dir.join("store.db");

        Self { root, meta_dir, config_path, store_path }
    }

    /// Compute a store path string suitable for storing in `WorkspaceConfig`,
    /// typically as a path relative to `root`.
    pub fn store_path_relative_string(&self) -> String {
        match self.store_path.strip_prefix(&self.root) {
            Ok(rel) => rel.to_string_lossy().to_string(),
            Err(_) => self.store_path.to_string_lossy().to_string(),
        }
    }

    /// Resolve a configured store path against the root unless it is absolute.
    pub fn resolve(&self, configured: &str) -> PathBuf {
        let path = Path::new(configured);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
