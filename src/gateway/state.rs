use std::sync::Arc;

use crate::accounts::AccountAuthService;
use crate::config::UploadConfig;
use crate::db::Database;

/// Shared gateway application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL database (all repositories borrow the pool from here)
    pub db: Arc<Database>,
    /// Account authentication (argon2 + JWT)
    pub auth: Arc<AccountAuthService>,
    /// Certificate upload settings
    pub uploads: UploadConfig,
}

impl AppState {
    pub fn new(db: Arc<Database>, auth: Arc<AccountAuthService>, uploads: UploadConfig) -> Self {
        Self { db, auth, uploads }
    }
}
