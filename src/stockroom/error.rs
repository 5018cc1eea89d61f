use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    #[error("Invalid product ID: {0:?}")]
    InvalidId(String),

    #[error("Invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Unknown field: {0:?} (expected name, desc, price or quantity)")]
    UnknownField(String),

    #[error("Malformed data in {}: {source}", path.display())]
    MalformedData {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("Duplicate product ID in data file: {0}")]
    DuplicateId(u32),

    #[error("No product IDs left: the highest ID is already {}", u32::MAX)]
    IdsExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StockError {
    /// True for errors caused by what the user typed at a prompt, as opposed
    /// to storage failures.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            StockError::InvalidId(_)
                | StockError::InvalidNumber { .. }
                | StockError::UnknownField(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
