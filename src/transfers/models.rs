//! Data models for book transfers

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A transfer row. `copies` is the amount debited at creation time and the
/// exact amount restored if the transfer is deleted.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Transfer {
    pub transfer_id: i64,
    pub book_id: i64,
    pub destination: String,
    pub copies: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Transfer joined with its book, for listings and creation responses
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TransferDetails {
    pub transfer_id: i64,
    pub book_id: i64,
    pub destination: String,
    pub copies: i64,
    pub book_title: String,
    pub book_author: String,
    pub book_genre: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Transfer creation request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTransferRequest {
    pub book_id: i64,
    pub destination: String,
    pub copies: i64,
}
