use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Product;

pub fn run(
    inventory: &mut Inventory,
    name: String,
    desc: String,
    price: f64,
    quantity: u32,
) -> Result<CmdResult> {
    let product = Product::new(inventory.next_id()?, name, desc, price, quantity);
    inventory.add(product.clone());

    let mut result = CmdResult::default().with_affected_products(vec![product]);
    result.add_message(CmdMessage::success("Product added successfully."));
    Ok(result)
}
