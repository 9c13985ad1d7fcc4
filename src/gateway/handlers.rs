//! Health check handler

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State, http::StatusCode};
use utoipa::ToSchema;

use super::state::AppState;
use super::types::ApiResponse;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
///
/// Pings PostgreSQL (rate limited) and reports service health without
/// exposing internal details.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json"),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    // Rate limit: only ping DB once per interval
    static LAST_CHECK_MS: AtomicU64 = AtomicU64::new(0);
    const CHECK_INTERVAL_MS: u64 = 5000;

    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let last_check = LAST_CHECK_MS.load(Ordering::Relaxed);
    let healthy = if now_ms.saturating_sub(last_check) > CHECK_INTERVAL_MS {
        LAST_CHECK_MS.store(now_ms, Ordering::Relaxed);
        match state.db.health_check().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Health check DB ping failed: {}", e);
                false
            }
        }
    } else {
        // Inside the rate-limit window, report healthy without pinging
        true
    };

    if healthy {
        (
            StatusCode::OK,
            Json(ApiResponse::success(
                "ok",
                HealthResponse {
                    timestamp_ms: now_ms,
                },
            )),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                success: false,
                message: "unavailable".to_string(),
                data: None,
            }),
        )
    }
}
