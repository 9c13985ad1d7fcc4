use thiserror::Error;

use crate::books::InventoryError;

#[derive(Error, Debug)]
pub enum DonationError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Donor not found: {0}")]
    DonorNotFound(i64),

    #[error("{0}")]
    Inventory(#[from] InventoryError),

    /// Failure attributable to one entry of a donation batch
    #[error("books[{index}]: {source}")]
    Entry {
        index: usize,
        source: InventoryError,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
