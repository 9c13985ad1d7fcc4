use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Librarian not found: {0}")]
    NotFound(i64),

    #[error("Email already exists")]
    EmailExists,

    #[error("Phone number already exists")]
    PhoneExists,

    #[error("Cannot delete librarian who has recorded books")]
    HasBooks,

    #[error("Cannot delete librarian who has registered donors")]
    HasDonors,

    #[error("Cannot delete librarian who has certificate records")]
    HasCertificates,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Password hashing failed: {0}")]
    Hash(String),
}
