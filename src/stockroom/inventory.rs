//! # Inventory
//!
//! The in-memory product list. Products keep their insertion (or file) order,
//! and ids always form the dense range `1..=len` once a delete has happened:
//! [`Inventory::remove`] renumbers every remaining product in sequence order.
//! Ids are therefore display handles, not stable identifiers across deletes.
//!
//! New ids come from [`Inventory::next_id`], which is `max(id) + 1` rather
//! than `len + 1`. The two only differ for a freshly loaded file with gaps.
//! A file whose highest id is `u32::MAX` loads fine but has no next id.

use crate::error::{Result, StockError};
use crate::model::{Product, ProductField};
use crate::store::fs::CsvStore;
use crate::store::ProductStore;
use log::debug;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Loads the CSV file at `path`. A missing file gives an empty inventory;
    /// any malformed row fails the whole load.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_from(&CsvStore::new(path.as_ref()))
    }

    pub fn load_from<S: ProductStore>(store: &S) -> Result<Self> {
        Ok(Self::from_products(store.load()?))
    }

    /// Overwrites the CSV file at `path` with the current products.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.save_to(&mut CsvStore::new(path.as_ref()))
    }

    pub fn save_to<S: ProductStore>(&self, store: &mut S) -> Result<()> {
        store.save(&self.products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn next_id(&self) -> Result<u32> {
        match self.products.iter().map(|p| p.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(StockError::IdsExhausted),
        }
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn find_by_id_mut(&mut self, id: u32) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Appends `product` as is. Callers take the id from [`Self::next_id`].
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes the product with `id` and renumbers the rest to `1..=len`.
    /// Returns the removed product (with its old id), or `None` if absent,
    /// in which case nothing changes.
    pub fn remove(&mut self, id: u32) -> Option<Product> {
        let position = self.products.iter().position(|p| p.id == id)?;
        let removed = self.products.remove(position);
        self.renumber();
        Some(removed)
    }

    fn renumber(&mut self) {
        for (new_id, product) in (1..).zip(self.products.iter_mut()) {
            if product.id != new_id {
                debug!("Renumbering product {} -> {}", product.id, new_id);
            }
            product.id = new_id;
        }
    }

    /// Sets `field` on product `id` from user text. Numeric fields are parsed
    /// before anything is written, so a bad value leaves the product as it was.
    pub fn update(&mut self, id: u32, field: ProductField, raw_value: &str) -> Result<&Product> {
        let product = self
            .find_by_id_mut(id)
            .ok_or(StockError::ProductNotFound(id))?;
        field.apply(product, raw_value)?;
        Ok(product)
    }
}
