use thiserror::Error;
use uuid::Uuid;

/// Field-level rejection of user input. Raised before any state changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Price cannot be empty")]
    EmptyPrice,

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Price cannot be negative")]
    NegativePrice,

    #[error("Date cannot be empty")]
    EmptyDate,

    #[error("Invalid date: {0} (expected e.g. 2024-01-31 or 31.01.2024)")]
    InvalidDate(String),
}

#[derive(Error, Debug)]
pub enum BillzError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BillzError>;
