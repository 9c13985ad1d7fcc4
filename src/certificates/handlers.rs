use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::error::CertificateError;
use super::models::CertificateRecord;
use super::service::CertificateService;
use crate::gateway::{state::AppState, types::ApiResponse};

/// Upload a donation certificate image (multipart form)
///
/// POST /api/v1/certificates
///
/// Fields: `certificate` (image file), `donor_id`, `librarian_id`
#[utoipa::path(
    post,
    path = "/api/v1/certificates",
    responses(
        (status = 201, description = "Certificate uploaded", body = ApiResponse<CertificateRecord>),
        (status = 400, description = "Missing file or invalid form data"),
        (status = 404, description = "Donor not found")
    ),
    tag = "Certificates"
)]
pub async fn upload_certificate(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<CertificateRecord>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let mut donor_id: Option<i64> = None;
    let mut librarian_id: Option<i64> = None;
    let mut file_name: Option<String> = None;
    let mut bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Invalid form data: {e}"))),
        )
    })? {
        let bad_field = |e: axum::extract::multipart::MultipartError| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(format!("Invalid form data: {e}"))),
            )
        };
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("certificate") => {
                file_name = field.file_name().map(str::to_string);
                bytes = Some(field.bytes().await.map_err(bad_field)?.to_vec());
            }
            Some("donor_id") => {
                donor_id = field.text().await.map_err(bad_field)?.trim().parse().ok();
            }
            Some("librarian_id") => {
                librarian_id = field.text().await.map_err(bad_field)?.trim().parse().ok();
            }
            _ => {}
        }
    }

    let (Some(donor_id), Some(librarian_id)) = (donor_id, librarian_id) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Donor ID and Librarian ID are required",
            )),
        ));
    };
    let (Some(file_name), Some(bytes)) = (file_name, bytes) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("No file uploaded")),
        ));
    };

    match CertificateService::store(
        state.db.pool(),
        &state.uploads,
        donor_id,
        librarian_id,
        &file_name,
        &bytes,
    )
    .await
    {
        Ok(record) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(
                "Certificate uploaded successfully",
                record,
            )),
        )),
        Err(e) => {
            let status = match &e {
                CertificateError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                CertificateError::DonorNotFound(_) => StatusCode::NOT_FOUND,
                CertificateError::Database(_) | CertificateError::Io(_) => {
                    tracing::error!("Certificate upload failed: {:?}", e);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            Err((status, Json(ApiResponse::<()>::error(e.to_string()))))
        }
    }
}

/// Latest certificate for a donor
///
/// GET /api/v1/donors/{id}/certificate
#[utoipa::path(
    get,
    path = "/api/v1/donors/{id}/certificate",
    params(("id" = i64, Path, description = "Donor id")),
    responses(
        (status = 200, description = "Latest certificate (data is null when none exists)",
         body = ApiResponse<CertificateRecord>)
    ),
    tag = "Certificates"
)]
pub async fn latest_certificate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Option<CertificateRecord>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match CertificateService::latest_for_donor(state.db.pool(), id).await {
        Ok(record) => {
            let message = if record.is_some() {
                "Latest certificate retrieved successfully"
            } else {
                "No certificate found for this donor"
            };
            Ok(Json(ApiResponse::success(message, record)))
        }
        Err(e) => {
            tracing::error!("Failed to fetch latest certificate: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Database error occurred")),
            ))
        }
    }
}
