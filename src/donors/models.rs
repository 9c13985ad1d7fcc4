//! Data models for donor management

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A donor row
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Donor {
    pub donor_id: i64,
    pub name: String,
    pub phone: String,
    pub librarian_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Donor joined with donation totals, for listings
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct DonorOverview {
    pub donor_id: i64,
    pub name: String,
    pub phone: String,
    pub total_donations: i64,
    pub last_donation_at: Option<NaiveDateTime>,
    pub librarian_name: Option<String>,
    pub created_at: NaiveDateTime,
}

/// One donated book in a donor's history
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct DonatedBook {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub copies: i64,
    pub donated_at: NaiveDateTime,
    pub librarian_name: Option<String>,
}
