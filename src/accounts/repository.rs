//! Repository layer for librarian staff management

use sqlx::{PgPool, Row};

use super::error::AccountError;
use super::models::{LibrarianOverview, Role};
use super::service::AccountAuthService;
use crate::validation::{EmailAddress, PhoneNumber, check_password, required_text};

/// Staff management for librarian accounts
pub struct AccountRepository;

impl AccountRepository {
    /// List librarians with books-recorded and donors-registered counts
    pub async fn list_librarians(pool: &PgPool) -> Result<Vec<LibrarianOverview>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT a.account_id, a.name, a.email, a.phone,
                   COALESCE(COUNT(DISTINCT b.book_id), 0)::BIGINT AS books_recorded,
                   COALESCE(COUNT(DISTINCT d.donor_id), 0)::BIGINT AS donors_registered,
                   a.created_at
            FROM accounts a
            LEFT JOIN books b ON a.account_id = b.librarian_id
            LEFT JOIN donors d ON a.account_id = d.librarian_id
            WHERE a.role = 'librarian'
            GROUP BY a.account_id
            ORDER BY a.created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    async fn get_overview(
        pool: &PgPool,
        account_id: i64,
    ) -> Result<LibrarianOverview, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT a.account_id, a.name, a.email, a.phone,
                   COALESCE(COUNT(DISTINCT b.book_id), 0)::BIGINT AS books_recorded,
                   COALESCE(COUNT(DISTINCT d.donor_id), 0)::BIGINT AS donors_registered,
                   a.created_at
            FROM accounts a
            LEFT JOIN books b ON a.account_id = b.librarian_id
            LEFT JOIN donors d ON a.account_id = d.librarian_id
            WHERE a.account_id = $1 AND a.role = 'librarian'
            GROUP BY a.account_id
            "#,
        )
        .bind(account_id)
        .fetch_one(pool)
        .await
    }

    /// Create a librarian account; email and phone stay unique among
    /// librarians
    pub async fn create_librarian(
        pool: &PgPool,
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
    ) -> Result<LibrarianOverview, AccountError> {
        let name = required_text("name", name)?;
        let email = EmailAddress::new(email)?;
        let phone = PhoneNumber::new(phone)?;
        check_password(password)?;

        let password_hash = AccountAuthService::hash_password(password.trim())
            .map_err(|e| AccountError::Hash(e.to_string()))?;

        let mut tx = pool.begin().await?;

        let email_taken =
            sqlx::query("SELECT account_id FROM accounts WHERE email = $1 AND role = 'librarian'")
                .bind(email.as_str())
                .fetch_optional(&mut *tx)
                .await?;
        if email_taken.is_some() {
            return Err(AccountError::EmailExists);
        }

        let phone_taken =
            sqlx::query("SELECT account_id FROM accounts WHERE phone = $1 AND role = 'librarian'")
                .bind(phone.as_str())
                .fetch_optional(&mut *tx)
                .await?;
        if phone_taken.is_some() {
            return Err(AccountError::PhoneExists);
        }

        let account_id: i64 = sqlx::query(
            "INSERT INTO accounts (name, email, phone, password_hash, role)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING account_id",
        )
        .bind(&name)
        .bind(email.as_str())
        .bind(phone.as_str())
        .bind(&password_hash)
        .bind(Role::Librarian.as_str())
        .fetch_one(&mut *tx)
        .await?
        .get("account_id");

        tx.commit().await?;

        Ok(Self::get_overview(pool, account_id).await?)
    }

    /// Update a librarian; password only changes when one is supplied
    pub async fn update_librarian(
        pool: &PgPool,
        account_id: i64,
        name: &str,
        email: &str,
        phone: &str,
        password: Option<&str>,
    ) -> Result<LibrarianOverview, AccountError> {
        let name = required_text("name", name)?;
        let email = EmailAddress::new(email)?;
        let phone = PhoneNumber::new(phone)?;

        let password_hash = match password.map(str::trim).filter(|p| !p.is_empty()) {
            Some(password) => {
                check_password(password)?;
                Some(
                    AccountAuthService::hash_password(password)
                        .map_err(|e| AccountError::Hash(e.to_string()))?,
                )
            }
            None => None,
        };

        let mut tx = pool.begin().await?;

        let exists = sqlx::query(
            "SELECT account_id FROM accounts WHERE account_id = $1 AND role = 'librarian'",
        )
        .bind(account_id)
        .fetch_optional(&mut *tx)
        .await?;
        if exists.is_none() {
            return Err(AccountError::NotFound(account_id));
        }

        let email_taken = sqlx::query(
            "SELECT account_id FROM accounts
             WHERE email = $1 AND account_id != $2 AND role = 'librarian'",
        )
        .bind(email.as_str())
        .bind(account_id)
        .fetch_optional(&mut *tx)
        .await?;
        if email_taken.is_some() {
            return Err(AccountError::EmailExists);
        }

        let phone_taken = sqlx::query(
            "SELECT account_id FROM accounts
             WHERE phone = $1 AND account_id != $2 AND role = 'librarian'",
        )
        .bind(phone.as_str())
        .bind(account_id)
        .fetch_optional(&mut *tx)
        .await?;
        if phone_taken.is_some() {
            return Err(AccountError::PhoneExists);
        }

        match password_hash {
            Some(hash) => {
                sqlx::query(
                    "UPDATE accounts
                     SET name = $1, email = $2, phone = $3, password_hash = $4,
                         updated_at = CURRENT_TIMESTAMP
                     WHERE account_id = $5",
                )
                .bind(&name)
                .bind(email.as_str())
                .bind(phone.as_str())
                .bind(&hash)
                .bind(account_id)
                .execute(&mut *tx)
                .await?;
            }
            None => {
                sqlx::query(
                    "UPDATE accounts
                     SET name = $1, email = $2, phone = $3, updated_at = CURRENT_TIMESTAMP
                     WHERE account_id = $4",
                )
                .bind(&name)
                .bind(email.as_str())
                .bind(phone.as_str())
                .bind(account_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Ok(Self::get_overview(pool, account_id).await?)
    }

    /// Guarded delete: refuses while books, donors or certificate records
    /// still reference the librarian
    pub async fn delete_librarian(pool: &PgPool, account_id: i64) -> Result<(), AccountError> {
        let mut tx = pool.begin().await?;

        let exists = sqlx::query(
            "SELECT account_id FROM accounts WHERE account_id = $1 AND role = 'librarian'",
        )
        .bind(account_id)
        .fetch_optional(&mut *tx)
        .await?;
        if exists.is_none() {
            return Err(AccountError::NotFound(account_id));
        }

        let books: i64 = sqlx::query("SELECT COUNT(*) AS n FROM books WHERE librarian_id = $1")
            .bind(account_id)
            .fetch_one(&mut *tx)
            .await?
            .get("n");
        if books > 0 {
            return Err(AccountError::HasBooks);
        }

        let donors: i64 = sqlx::query("SELECT COUNT(*) AS n FROM donors WHERE librarian_id = $1")
            .bind(account_id)
            .fetch_one(&mut *tx)
            .await?
            .get("n");
        if donors > 0 {
            return Err(AccountError::HasDonors);
        }

        let certificates: i64 =
            sqlx::query("SELECT COUNT(*) AS n FROM certificates WHERE librarian_id = $1")
                .bind(account_id)
                .fetch_one(&mut *tx)
                .await?
                .get("n");
        if certificates > 0 {
            return Err(AccountError::HasCertificates);
        }

        sqlx::query("DELETE FROM accounts WHERE account_id = $1")
            .bind(account_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
