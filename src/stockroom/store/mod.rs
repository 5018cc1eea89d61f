//! # Storage Layer
//!
//! Product persistence sits behind the [`ProductStore`] trait so the inventory
//! logic never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: production storage, one CSV file
//!   - Header row `id,name,desc,price,quantity`
//!   - Saves go through a temporary sibling file and a rename
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert when the session wrote back
//!
//! ## Storage Format
//!
//! ```text
//! id,name,desc,price,quantity
//! 1,Widget,A small widget,9.5,10
//! 2,"Bolts, assorted",Box of 200,4.25,3
//! ```
//!
//! The whole product list is loaded at startup and written back in one piece;
//! there is no incremental append.

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod memory;

pub const HEADER: [&str; 5] = ["id", "name", "desc", "price", "quantity"];

/// Abstract interface for product storage.
pub trait ProductStore {
    /// Read every stored product in file order. A store that has never been
    /// written returns an empty list.
    fn load(&self) -> Result<Vec<Product>>;

    /// Replace the stored products with `products`.
    fn save(&mut self, products: &[Product]) -> Result<()>;
}
