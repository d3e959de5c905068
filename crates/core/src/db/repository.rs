use tracing::{debug, warn};

use crate::db::{DbError, DbResult, KeyValueStore};
use crate::model::Product;

/// Slot key used when none is configured.
pub const DEFAULT_PRODUCTS_KEY: &str = "savedProducts";

/// Reads and writes the saved-products collection as one JSON array.
///
/// Every write replaces the whole array; there is no incremental update.
#[derive(Debug)]
pub struct ProductRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ProductRepository<S> {
    /// Repository over `store` using [`DEFAULT_PRODUCTS_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_PRODUCTS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load saved products, treating malformed content as an empty collection.
    ///
    /// Store access errors are still returned.
    pub fn load(&self) -> DbResult<Vec<Product>> {
        match self.load_strict() {
            Err(DbError::Corrupt { key, source }) => {
                warn!(%key, error = %source, "ignoring malformed saved products");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Load saved products, failing with [`DbError::Corrupt`] on malformed content.
    pub fn load_strict(&self) -> DbResult<Vec<Product>> {
        let Some(raw) = self.store.get(&self.key)? else {
            debug!(key = %self.key, "no saved products yet");
            return Ok(Vec::new());
        };
        let products: Vec<Product> = serde_json::from_str(&raw)
            .map_err(|source| DbError::Corrupt { key: self.key.clone(), source })?;
        debug!(key = %self.key, count = products.len(), "loaded saved products");
        Ok(products)
    }

    /// Serialize `products` and overwrite the slot.
    pub fn save(&mut self, products: &[Product]) -> DbResult<()> {
        let json = serde_json::to_string(products)?;
        self.store.set(&self.key, &json)?;
        debug!(key = %self.key, count = products.len(), "saved products persisted");
        Ok(())
    }
}
