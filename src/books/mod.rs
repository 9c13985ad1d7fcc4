//! Book inventory: authoritative copy-count per (title, author) pair

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

pub use error::InventoryError;
pub use models::{Book, BookLookup, NewBook};
pub use repository::BookRepository;
