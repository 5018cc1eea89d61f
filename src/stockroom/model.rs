use crate::error::{Result, StockError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

pub const ID_WIDTH: usize = 4;
pub const NAME_WIDTH: usize = 15;
pub const DESC_WIDTH: usize = 30;
pub const PRICE_WIDTH: usize = 15;
pub const QUANTITY_WIDTH: usize = 10;

const NAME_PREVIEW: usize = 13;
const DESC_PREVIEW: usize = 23;
const ELLIPSIS: &str = "...";

/// One catalog item. Field names double as the CSV column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub desc: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        desc: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            desc: desc.into(),
            price,
            quantity,
        }
    }

    /// Single table row with long names and descriptions cut short.
    pub fn compact_row(&self) -> String {
        let name = truncate_chars(&self.name, NAME_PREVIEW);
        let desc = truncate_chars(&self.desc, DESC_PREVIEW);
        format!(
            "{:<id_w$}  {}   {}   {}   {:<qty_w$}",
            self.id,
            pad_to_width(&name, NAME_WIDTH),
            pad_to_width(&desc, DESC_WIDTH),
            pad_to_width(&format_currency(self.price), PRICE_WIDTH),
            self.quantity,
            id_w = ID_WIDTH,
            qty_w = QUANTITY_WIDTH,
        )
    }

    pub fn full_description(&self) -> String {
        format!(
            "ID: {}\nName: {}\nDescription: {}\nPrice: {}\nQuantity: {}",
            self.id,
            self.name,
            self.desc,
            format_currency(self.price),
            self.quantity
        )
    }
}

/// The editable fields of a [`Product`]. The id is owned by the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Desc,
    Price,
    Quantity,
}

impl ProductField {
    pub const ALL: [ProductField; 4] = [
        ProductField::Name,
        ProductField::Desc,
        ProductField::Price,
        ProductField::Quantity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Desc => "desc",
            ProductField::Price => "price",
            ProductField::Quantity => "quantity",
        }
    }

    /// Parses `raw` for this field and writes it into `product`.
    /// On a parse failure the product is left untouched.
    pub fn apply(&self, product: &mut Product, raw: &str) -> Result<()> {
        match self {
            ProductField::Name => product.name = raw.to_string(),
            ProductField::Desc => product.desc = raw.to_string(),
            ProductField::Price => product.price = parse_price(raw)?,
            ProductField::Quantity => product.quantity = parse_quantity(raw)?,
        }
        Ok(())
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductField {
    type Err = StockError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ProductField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| StockError::UnknownField(s.trim().to_string()))
    }
}

pub fn parse_id(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| StockError::InvalidId(raw.trim().to_string()))
}

pub fn parse_price(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(StockError::InvalidNumber {
            field: "price",
            value: raw.trim().to_string(),
        }),
    }
}

pub fn parse_quantity(raw: &str) -> Result<u32> {
    raw.trim().parse().map_err(|_| StockError::InvalidNumber {
        field: "quantity",
        value: raw.trim().to_string(),
    })
}

/// Formats a price as dollars with thousands separators, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(max_chars).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Left-aligns `s` in a column of `width` terminal cells.
pub(crate) fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
