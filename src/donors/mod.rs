//! Donor registry: people who donate books, keyed by unique phone number

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

pub use error::DonorError;
pub use models::Donor;
pub use repository::DonorRepository;
