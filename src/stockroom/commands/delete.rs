use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;

pub fn run(inventory: &mut Inventory, id: u32) -> Result<CmdResult> {
    let removed = inventory
        .remove(id)
        .ok_or(StockError::ProductNotFound(id))?;

    let mut result = CmdResult::default().with_affected_products(vec![removed]);
    result.add_message(CmdMessage::success(format!(
        "Product with ID {} deleted successfully.",
        id
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn inventory() -> Inventory {
        Inventory::from_products(vec![
            Product::new(1, "Widget", "", 1.0, 1),
            Product::new(2, "Gadget", "", 2.0, 2),
        ])
    }

    #[test]
    fn deletes_and_renumbers() {
        let mut inventory = inventory();
        let result = run(&mut inventory, 1).unwrap();

        assert_eq!(result.affected_products[0].name, "Widget");
        assert_eq!(
            result.messages[0].content,
            "Product with ID 1 deleted successfully."
        );
        assert_eq!(inventory.products()[0].id, 1);
        assert_eq!(inventory.products()[0].name, "Gadget");
    }

    #[test]
    fn missing_id_is_not_found_and_changes_nothing() {
        let mut inventory = inventory();
        assert!(matches!(
            run(&mut inventory, 5),
            Err(StockError::ProductNotFound(5))
        ));
        assert_eq!(inventory.len(), 2);
    }
}
