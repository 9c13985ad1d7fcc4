use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::error::DonationError;
use super::models::{BatchReceipt, RecordBatchRequest};
use super::service::DonationService;
use crate::books::InventoryError;
use crate::gateway::{state::AppState, types::ApiResponse};

/// Record a donation batch: every entry plus the optional certificate
/// record commits atomically, or nothing does
///
/// POST /api/v1/donations
#[utoipa::path(
    post,
    path = "/api/v1/donations",
    request_body = RecordBatchRequest,
    responses(
        (status = 201, description = "Donation recorded", body = ApiResponse<BatchReceipt>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Donor or a referenced book does not exist")
    ),
    tag = "Donations"
)]
pub async fn record_batch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecordBatchRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BatchReceipt>>), (StatusCode, Json<ApiResponse<()>>)> {
    match DonationService::record_batch(state.db.pool(), &req).await {
        Ok(receipt) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(
                "Donation recorded successfully",
                receipt,
            )),
        )),
        Err(e) => {
            let status = match &e {
                DonationError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                DonationError::DonorNotFound(_) => StatusCode::NOT_FOUND,
                DonationError::Entry { source, .. } | DonationError::Inventory(source) => {
                    match source {
                        InventoryError::NotFound(_) => StatusCode::NOT_FOUND,
                        InventoryError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                        InventoryError::Insufficient { .. } | InventoryError::HasDonations => {
                            StatusCode::CONFLICT
                        }
                        InventoryError::Database(_) => {
                            tracing::error!("Donation batch failed: {:?}", e);
                            StatusCode::INTERNAL_SERVER_ERROR
                        }
                    }
                }
                DonationError::Database(_) => {
                    tracing::error!("Donation batch failed: {:?}", e);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            Err((
                status,
                Json(ApiResponse::<()>::error(format!(
                    "Error recording donation: {e}"
                ))),
            ))
        }
    }
}
