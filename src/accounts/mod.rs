//! Librarian/admin accounts: credentials, roles and staff management

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod service;

pub use error::AccountError;
pub use models::{Account, Role};
pub use repository::AccountRepository;
pub use service::{AccountAuthService, Claims};
