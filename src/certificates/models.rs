//! Data models for certificate file records

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A stored certificate image record. The path is opaque to inventory
/// logic; it never affects copy-counts.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CertificateRecord {
    pub file_id: i64,
    pub path: String,
    pub donor_id: i64,
    pub librarian_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
