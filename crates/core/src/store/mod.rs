//! Calculator state store.
//!
//! `Calculator` owns the working material list, the material entry form, the
//! draft product name and the saved products, plus the repository they are
//! persisted through. All mutation goes through `&mut self`, so a frontend
//! owns exactly one calculator and drives it from its own loop.

use tracing::{debug, error, info};

use crate::calc;
use crate::db::{DbResult, KeyValueStore, ProductRepository};
use crate::entry::{parse_amount, require_text, EntryError, MaterialText};
use crate::model::{Material, Product};

/// Unsubmitted contents of the add-material form.
pub type MaterialForm = MaterialText;

#[derive(Debug)]
pub struct Calculator<S> {
    materials: Vec<Material>,
    form: MaterialForm,
    product_name: String,
    products: Vec<Product>,
    repository: ProductRepository<S>,
}

impl<S: KeyValueStore> Calculator<S> {
    /// Build a calculator, hydrating saved products from `repository`.
    ///
    /// With `strict` set, malformed saved data is an error; otherwise the
    /// calculator starts with no saved products.
    pub fn open(repository: ProductRepository<S>, strict: bool) -> DbResult<Self> {
        let products = if strict { repository.load_strict()? } else { repository.load()? };
        info!(count = products.len(), key = repository.key(), "calculator ready");
        Ok(Self {
            materials: Vec::new(),
            form: MaterialForm::default(),
            product_name: String::new(),
            products,
            repository,
        })
    }

    /// Working list, in insertion order.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Saved products, in save order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Weighted total of the working list.
    pub fn total_cost(&self) -> f64 {
        calc::total_cost(&self.materials)
    }

    pub fn material_form(&self) -> &MaterialForm {
        &self.form
    }

    pub fn material_form_mut(&mut self) -> &mut MaterialForm {
        &mut self.form
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn set_product_name(&mut self, name: impl Into<String>) {
        self.product_name = name.into();
    }

    pub fn repository(&self) -> &ProductRepository<S> {
        &self.repository
    }

    pub fn into_repository(self) -> ProductRepository<S> {
        self.repository
    }

    /// Append a material to the working list.
    ///
    /// All three fields must be non-empty after trimming and both numbers must
    /// parse to finite values. The line's weighted cost and the new list total
    /// must stay finite so saved costs always serialize. On success the
    /// material form is cleared; on rejection nothing changes.
    pub fn add_material(
        &mut self,
        name: &str,
        unit_cost: &str,
        percentage: &str,
    ) -> Result<&Material, EntryError> {
        let name = require_text("material name", name)?;
        let unit_cost = parse_amount("unit cost", unit_cost)?;
        let percentage = parse_amount("percentage", percentage)?;

        let material = Material::new(name, unit_cost, percentage);
        let total = self.total_cost() + material.weighted_cost();
        if !material.weighted_cost().is_finite() || !total.is_finite() {
            return Err(EntryError::CostOverflow(material.name));
        }
        debug!(id = %material.id, name = %material.name, unit_cost, percentage, "material added");
        let index = self.materials.len();
        self.materials.push(material);
        self.form = MaterialForm::default();
        Ok(&self.materials[index])
    }

    /// Add the material currently held in the form.
    pub fn submit_material(&mut self) -> Result<&Material, EntryError> {
        let form = self.form.clone();
        self.add_material(&form.name, &form.unit_cost, &form.percentage)
    }

    /// Remove a material from the working list. Absent ids are a no-op.
    pub fn delete_material(&mut self, id: &str) -> Option<Material> {
        let index = self.materials.iter().position(|m| m.id == id)?;
        let removed = self.materials.remove(index);
        debug!(id, name = %removed.name, "material removed");
        Some(removed)
    }

    /// Save the working list as a named product.
    ///
    /// Requires a non-empty name, at least one material and a finite cost. The
    /// full product collection is persisted, then the working list and draft
    /// name are cleared. A failed write is logged and does not undo the save.
    pub fn save_product(&mut self, name: &str) -> Result<&Product, EntryError> {
        let name = require_text("product name", name)?;
        if self.materials.is_empty() {
            return Err(EntryError::EmptyWorkingList);
        }

        let product = Product::from_materials(name, self.materials.clone());
        if !product.cost.is_finite() {
            return Err(EntryError::CostOverflow(product.name));
        }
        info!(id = %product.id, name = %product.name, cost = product.cost, "product saved");
        let index = self.products.len();
        self.products.push(product);
        self.persist();

        self.materials.clear();
        self.product_name.clear();
        Ok(&self.products[index])
    }

    /// Save using the draft product name.
    pub fn submit_product(&mut self) -> Result<&Product, EntryError> {
        let name = self.product_name.clone();
        self.save_product(&name)
    }

    /// Remove a saved product and persist the remaining set. Absent ids are a
    /// no-op and do not write.
    pub fn delete_product(&mut self, id: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        let removed = self.products.remove(index);
        info!(id, name = %removed.name, "product deleted");
        self.persist();
        Some(removed)
    }

    fn persist(&mut self) {
        if let Err(err) = self.repository.save(&self.products) {
            error!(error = %err, key = self.repository.key(), "failed to persist saved products");
        }
    }
}
