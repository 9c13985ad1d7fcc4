//! Bookbridge - Book Donation Tracking Backend
//!
//! Librarians record donors, books, donations and inter-library transfers;
//! administrators view aggregate statistics. Every copy-count change runs
//! inside a database transaction so inventory never drifts.
//!
//! # Modules
//!
//! - [`books`] - Inventory: authoritative copy-count per (title, author)
//! - [`donations`] - Donation recording (fact rows + count increments)
//! - [`transfers`] - Outbound transfers (count debits, restorable)
//! - [`donors`] - Donor registry
//! - [`accounts`] - Librarian/admin credentials and staff management
//! - [`certificates`] - Donation certificate images
//! - [`stats`] - Dashboard and admin aggregates
//! - [`gateway`] - Axum HTTP server
//! - [`db`] - PostgreSQL pool wrapper

pub mod config;
pub mod db;
pub mod logging;
pub mod validation;

// Domain modules
pub mod accounts;
pub mod books;
pub mod certificates;
pub mod donations;
pub mod donors;
pub mod stats;
pub mod transfers;

// HTTP layer
pub mod gateway;

// Convenient re-exports at crate root
pub use books::{Book, BookLookup, BookRepository, InventoryError};
pub use db::Database;
pub use donations::DonationService;
pub use transfers::TransferService;
