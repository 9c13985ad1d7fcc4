//! Data models for aggregate statistics

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// One of the ten most recent donations, with donor and book details
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct RecentDonation {
    pub donation_id: i64,
    pub copies: i64,
    pub created_at: NaiveDateTime,
    pub donor_name: String,
    pub donor_phone: String,
    pub book_title: String,
    pub book_author: String,
}

/// Donation volume for one calendar month
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct MonthlyDonations {
    /// Month formatted as YYYY-MM
    pub month: String,
    pub donations_count: i64,
    pub copies_count: i64,
}

/// Dashboard payload for the librarian landing page
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_donors: i64,
    pub total_books: i64,
    pub total_copies: i64,
    pub total_donations: i64,
    pub total_donated_copies: i64,
    pub recent_donations: Vec<RecentDonation>,
    pub monthly_donations: Vec<MonthlyDonations>,
}

/// Compact totals for the admin stats view
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct SummaryStats {
    pub total_books: i64,
    pub total_donors: i64,
    pub total_librarians: i64,
    pub total_copies: i64,
}
