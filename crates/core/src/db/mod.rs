//! Persistence layer and workspace definitions.
//!
//! Saved products live in a single durable key-value slot. This module holds:
//! - `KeyValueStore`: the slot abstraction, with `SqliteStore` (on disk) and
//!   `MemoryStore` (in process) implementations.
//! - `ProductRepository`: reads/writes the saved-products JSON blob.
//! - `WorkspaceLayout` / `WorkspaceConfig`: where things live on disk and how
//!   the workspace is configured.
//! - `WorkspaceContext`: config plus an opened, hydrated calculator.

use thiserror::Error;

pub mod config;
pub mod context;
pub mod kv;
pub mod layout;
pub mod repository;
pub mod sqlite_store;
pub mod util;

pub use config::*;
pub use context::*;
pub use kv::*;
pub use layout::*;
pub use repository::*;
pub use sqlite_store::*;
pub use util::*;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum DbError {
    /// Underlying SQLite error.
    #[error("SQLite error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// Filesystem error while preparing the store location.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a value before writing it.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The store was created with a newer schema version than we support.
    #[error(
        "Unsupported schema version {found}; supported range is {min_supported}..={max_supported}"
    )]
    UnsupportedSchemaVersion { found: i32, min_supported: i32, max_supported: i32 },

    /// The slot holds something that is not a product list.
    #[error("Stored value under '{key}' is not valid product JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience result type for store operations.
pub type DbResult<T> = Result<T, DbError>;
