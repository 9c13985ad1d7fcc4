//! Donation certificate images: stored files plus their path records

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

pub use error::CertificateError;
pub use service::CertificateService;
