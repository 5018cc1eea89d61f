use super::ProductStore;
use crate::error::Result;
use crate::model::Product;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products, saves: 0 }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ProductStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.products = products.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---
