use colored::Colorize;
use std::io::{self, Write};
use stockroom::api::{CmdMessage, MessageLevel};
use stockroom::model::{
    Product, DESC_WIDTH, ID_WIDTH, NAME_WIDTH, PRICE_WIDTH, QUANTITY_WIDTH,
};

const RULE_WIDTH: usize = 80;

pub(super) fn table_header() -> String {
    format!(
        "{:<id_w$}  {:<name_w$}   {:<desc_w$}   {:<price_w$}   {:<qty_w$}",
        "ID",
        "Name",
        "Description",
        "Price",
        "Quantity",
        id_w = ID_WIDTH,
        name_w = NAME_WIDTH,
        desc_w = DESC_WIDTH,
        price_w = PRICE_WIDTH,
        qty_w = QUANTITY_WIDTH,
    )
}

/// Header, rule, one compact row per product, closing rule.
pub(super) fn render_table(products: &[Product]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&table_header());
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for product in products {
        out.push_str(&product.compact_row());
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}
