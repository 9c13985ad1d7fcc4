//! Donation recording: fact rows plus the matching inventory increments,
//! applied in one transaction

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

pub use error::DonationError;
pub use service::DonationService;
