use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("File storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Donor not found: {0}")]
    DonorNotFound(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
