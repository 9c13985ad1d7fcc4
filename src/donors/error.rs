use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum DonorError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Donor not found: {0}")]
    NotFound(i64),

    #[error("Donor with this phone number already exists")]
    PhoneExists,

    #[error("Cannot delete donor who has made donations")]
    HasDonations,

    #[error("{0}")]
    Validation(#[from] ValidationError),
}
