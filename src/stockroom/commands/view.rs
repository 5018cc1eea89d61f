use crate::commands::CmdResult;
use crate::error::{Result, StockError};
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory, id: u32) -> Result<CmdResult> {
    let product = inventory
        .find_by_id(id)
        .ok_or(StockError::ProductNotFound(id))?;
    Ok(CmdResult::default().with_listed_products(vec![product.clone()]))
}
