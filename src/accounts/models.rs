//! Data models for librarian/admin accounts

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

/// Account role. Gates which login endpoint accepts the account; carries no
/// inventory semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Librarian,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Librarian => "librarian",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An account row; `password_hash` never leaves the accounts module
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub account_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Librarian joined with activity counts, for staff listings
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct LibrarianOverview {
    pub account_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub books_recorded: i64,
    pub donors_registered: i64,
    pub created_at: NaiveDateTime,
}
