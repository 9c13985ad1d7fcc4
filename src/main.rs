//! Bookbridge - Book Donation Tracking Backend
//!
//! Boots the gateway: config, logging, PostgreSQL pool, HTTP server.

use std::sync::Arc;

use bookbridge::accounts::AccountAuthService;
use bookbridge::config::AppConfig;
use bookbridge::db::Database;
use bookbridge::gateway::{self, state::AppState};
use bookbridge::logging;

fn get_env() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = logging::init_logging(&config);

    tracing::info!("Starting bookbridge in {} mode", env);

    let db = Arc::new(Database::connect(&config.postgres_url).await?);
    db.health_check().await?;

    let auth = Arc::new(AccountAuthService::new(
        db.pool().clone(),
        config.jwt_secret.clone(),
    ));

    let state = Arc::new(AppState::new(db, auth, config.uploads.clone()));

    gateway::run_server(&config, state).await
}
