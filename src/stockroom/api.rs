//! # API Facade
//!
//! [`InventoryApi`] is the single entry point the session (or any other UI)
//! talks to. It owns the store and the in-memory [`Inventory`], turns raw user
//! text into typed values (ids, prices, quantities, field names) and hands off
//! to the command modules.
//!
//! It does no printing and holds no business rules of its own; those live in
//! `commands/*.rs` and `inventory.rs`.
//!
//! `InventoryApi<S: ProductStore>` is generic over storage:
//! - Production: `InventoryApi<CsvStore>`
//! - Testing: `InventoryApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::{parse_id, parse_price, parse_quantity, ProductField};
use crate::store::ProductStore;

pub struct InventoryApi<S: ProductStore> {
    store: S,
    inventory: Inventory,
}

impl<S: ProductStore> InventoryApi<S> {
    /// Loads the inventory from `store`. Fails if the stored data is malformed.
    pub fn open(store: S) -> Result<Self> {
        let inventory = Inventory::load_from(&store)?;
        Ok(Self { store, inventory })
    }

    pub fn add_product(
        &mut self,
        name: &str,
        desc: &str,
        price: &str,
        quantity: &str,
    ) -> Result<commands::CmdResult> {
        let price = parse_price(price)?;
        let quantity = parse_quantity(quantity)?;
        commands::add::run(
            &mut self.inventory,
            name.to_string(),
            desc.to_string(),
            price,
            quantity,
        )
    }

    pub fn view_product(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.inventory, parse_id(id)?)
    }

    pub fn update_product(
        &mut self,
        id: &str,
        field: &str,
        value: &str,
    ) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        let field: ProductField = field.parse()?;
        commands::update::run(&mut self.inventory, id, field, value)
    }

    pub fn delete_product(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.inventory, parse_id(id)?)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    /// Writes the whole inventory back to the store.
    pub fn save(&mut self) -> Result<()> {
        self.inventory.save_to(&mut self.store)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api(count: u32) -> InventoryApi<InMemoryStore> {
        InventoryApi::open(StoreFixture::new().with_products(count).store).unwrap()
    }

    #[test]
    fn open_loads_from_store() {
        assert_eq!(api(3).inventory().len(), 3);
    }

    #[test]
    fn add_parses_numbers() {
        let mut api = api(0);
        let result = api.add_product("Widget", "Small", " 9.5 ", "10").unwrap();
        assert_eq!(result.affected_products[0].price, 9.5);
        assert_eq!(result.affected_products[0].quantity, 10);
    }

    #[test]
    fn add_with_bad_price_adds_nothing() {
        let mut api = api(0);
        let err = api.add_product("Widget", "Small", "free", "10").unwrap_err();
        assert!(err.is_user_input());
        assert!(api.inventory().is_empty());
    }

    #[test]
    fn view_distinguishes_bad_input_from_missing() {
        let api = api(1);
        assert!(matches!(api.view_product("x"), Err(StockError::InvalidId(_))));
        assert!(matches!(
            api.view_product("2"),
            Err(StockError::ProductNotFound(2))
        ));
        assert_eq!(api.view_product("1").unwrap().listed_products.len(), 1);
    }

    #[test]
    fn update_rejects_unknown_fields() {
        let mut api = api(1);
        assert!(matches!(
            api.update_product("1", "colour", "red"),
            Err(StockError::UnknownField(_))
        ));
        api.update_product("1", "NAME", "Renamed").unwrap();
        assert_eq!(api.inventory().products()[0].name, "Renamed");
    }

    #[test]
    fn delete_dispatches_with_parsed_id() {
        let mut api = api(3);
        api.delete_product(" 2 ").unwrap();
        assert_eq!(api.inventory().len(), 2);
        assert!(matches!(api.delete_product("-1"), Err(StockError::InvalidId(_))));
    }

    #[test]
    fn save_writes_through_to_store() {
        let mut api = api(2);
        api.delete_product("1").unwrap();
        api.save().unwrap();
        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.store().products().len(), 1);
        assert_eq!(api.store().products()[0].id, 1);
    }
}
