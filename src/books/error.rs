use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Book not found: {0}")]
    NotFound(i64),

    #[error("Insufficient copies available. Available: {available}, Requested: {requested}")]
    Insufficient { available: i64, requested: i64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Cannot delete book that has donation records")]
    HasDonations,
}
