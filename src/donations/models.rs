//! Data models for donation recording

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A donation fact row: one donor gave `copies` of one book, recorded by one
/// librarian. Immutable once committed.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Donation {
    pub donation_id: i64,
    pub donor_id: i64,
    pub librarian_id: i64,
    pub book_id: i64,
    pub copies: i64,
    pub created_at: NaiveDateTime,
}

/// Reference to the donated book: an existing row by id, or a
/// (title, author) pair resolved insert-vs-increment at recording time
#[derive(Debug, Clone)]
pub enum BookRef {
    Id(i64),
    ByName {
        title: String,
        author: String,
        genre: String,
    },
}

/// One entry of a donation batch request
#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchEntry {
    pub book_id: i64,
    pub copies: i64,
}

/// Donation batch request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordBatchRequest {
    pub donor_id: i64,
    pub librarian_id: i64,
    pub books: Vec<BatchEntry>,
    /// Optional already-stored certificate image path
    pub certificate_path: Option<String>,
}

/// Summary returned after a committed batch
#[derive(Debug, Serialize, ToSchema)]
pub struct BatchReceipt {
    pub donor_id: i64,
    pub books_count: usize,
    pub total_copies: i64,
}
