use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_products(inventory.products().to_vec());
    if inventory.is_empty() {
        result.add_message(CmdMessage::info("No products yet. Use 'add' to create one."));
    }
    Ok(result)
}
