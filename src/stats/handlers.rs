use axum::{Extension, Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::models::{DashboardStats, SummaryStats};
use super::repository::StatsRepository;
use crate::accounts::Claims;
use crate::gateway::{state::AppState, types::ApiResponse};

/// Dashboard statistics for the librarian landing page
///
/// GET /api/v1/stats/dashboard
#[utoipa::path(
    get,
    path = "/api/v1/stats/dashboard",
    responses(
        (status = 200, description = "Dashboard statistics", body = ApiResponse<DashboardStats>)
    ),
    tag = "Stats"
)]
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<DashboardStats>>, (StatusCode, Json<ApiResponse<()>>)> {
    match StatsRepository::dashboard(state.db.pool()).await {
        Ok(stats) => Ok(Json(ApiResponse::success(
            "Dashboard statistics retrieved successfully",
            stats,
        ))),
        Err(e) => {
            tracing::error!("Failed to build dashboard stats: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error retrieving dashboard data")),
            ))
        }
    }
}

/// Aggregate totals for the admin view (admin role required)
///
/// GET /api/v1/stats/summary
#[utoipa::path(
    get,
    path = "/api/v1/stats/summary",
    responses(
        (status = 200, description = "Summary statistics", body = ApiResponse<SummaryStats>),
        (status = 403, description = "Admin role required")
    ),
    tag = "Stats"
)]
pub async fn summary(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ApiResponse<SummaryStats>>, (StatusCode, Json<ApiResponse<()>>)> {
    if claims.role != "admin" {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error("Admin role required")),
        ));
    }

    match StatsRepository::summary(state.db.pool()).await {
        Ok(stats) => Ok(Json(ApiResponse::success(
            "Stats retrieved successfully",
            stats,
        ))),
        Err(e) => {
            tracing::error!("Failed to build summary stats: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error retrieving stats")),
            ))
        }
    }
}
