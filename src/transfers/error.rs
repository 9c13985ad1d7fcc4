use thiserror::Error;

use crate::books::InventoryError;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Inventory(#[from] InventoryError),

    #[error("Transfer not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
