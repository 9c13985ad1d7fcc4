//! Data models for book inventory

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A book row. (title, author) is the natural dedup key; `available_count`
/// is the authoritative copy-count and never goes negative.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Book {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub available_count: i64,
    pub librarian_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Result of resolving a book by its (title, author) natural key.
///
/// Explicit two-branch type so callers deciding insert-vs-increment
/// cannot forget the absent case.
#[derive(Debug)]
pub enum BookLookup {
    Found(Book),
    Absent,
}

/// Fields for inserting a new book row
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub initial_count: i64,
    pub librarian_id: i64,
}

/// Book row joined with librarian and donation details, for listings
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BookOverview {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub available_count: i64,
    pub librarian_id: Option<i64>,
    pub added_by: Option<String>,
    pub donated_count: i64,
    pub created_at: NaiveDateTime,
}
