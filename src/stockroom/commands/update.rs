use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::ProductField;

pub fn run(
    inventory: &mut Inventory,
    id: u32,
    field: ProductField,
    value: &str,
) -> Result<CmdResult> {
    let product = inventory.update(id, field, value)?.clone();

    let mut result = CmdResult::default().with_affected_products(vec![product]);
    result.add_message(CmdMessage::success(format!(
        "Product {} updated successfully.",
        field
    )));
    Ok(result)
}
