//! Aggregate queries behind the dashboard and admin stats endpoints

use sqlx::{PgPool, Row};

use super::models::{DashboardStats, MonthlyDonations, RecentDonation, SummaryStats};

pub struct StatsRepository;

impl StatsRepository {
    /// System-wide dashboard: totals, ten most recent donations, monthly
    /// volume for the last twelve months
    pub async fn dashboard(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let total_donors: i64 = sqlx::query("SELECT COUNT(*) AS n FROM donors")
            .fetch_one(pool)
            .await?
            .get("n");

        let book_totals = sqlx::query(
            "SELECT COUNT(*) AS total_books,
                    COALESCE(SUM(available_count), 0)::BIGINT AS total_copies
             FROM books",
        )
        .fetch_one(pool)
        .await?;
        let total_books: i64 = book_totals.get("total_books");
        let total_copies: i64 = book_totals.get("total_copies");

        let donation_totals = sqlx::query(
            "SELECT COUNT(*) AS total_donations,
                    COALESCE(SUM(copies), 0)::BIGINT AS total_donated_copies
             FROM donations",
        )
        .fetch_one(pool)
        .await?;
        let total_donations: i64 = donation_totals.get("total_donations");
        let total_donated_copies: i64 = donation_totals.get("total_donated_copies");

        let recent_donations: Vec<RecentDonation> = sqlx::query_as(
            r#"
            SELECT don.donation_id, don.copies, don.created_at,
                   d.name AS donor_name, d.phone AS donor_phone,
                   b.title AS book_title, b.author AS book_author
            FROM donations don
            JOIN donors d ON don.donor_id = d.donor_id
            JOIN books b ON don.book_id = b.book_id
            ORDER BY don.created_at DESC
            LIMIT 10
            "#,
        )
        .fetch_all(pool)
        .await?;

        let monthly_donations: Vec<MonthlyDonations> = sqlx::query_as(
            r#"
            SELECT to_char(created_at, 'YYYY-MM') AS month,
                   COUNT(*) AS donations_count,
                   COALESCE(SUM(copies), 0)::BIGINT AS copies_count
            FROM donations
            WHERE created_at >= NOW() - INTERVAL '12 months'
            GROUP BY to_char(created_at, 'YYYY-MM')
            ORDER BY month DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(DashboardStats {
            total_donors,
            total_books,
            total_copies,
            total_donations,
            total_donated_copies,
            recent_donations,
            monthly_donations,
        })
    }

    /// Compact totals for the admin view
    pub async fn summary(pool: &PgPool) -> Result<SummaryStats, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT (SELECT COUNT(*) FROM books) AS total_books,
                   (SELECT COUNT(*) FROM donors) AS total_donors,
                   (SELECT COUNT(*) FROM accounts WHERE role = 'librarian') AS total_librarians,
                   (SELECT COALESCE(SUM(available_count), 0)::BIGINT FROM books) AS total_copies
            "#,
        )
        .fetch_one(pool)
        .await
    }
}
