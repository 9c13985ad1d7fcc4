use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::error::DonorError;
use super::models::{DonatedBook, Donor, DonorOverview};
use super::repository::DonorRepository;
use crate::gateway::{state::AppState, types::ApiResponse};

// --- Requests ---

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDonorRequest {
    pub name: String,
    pub phone: String,
    pub librarian_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDonorRequest {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DonorLookupRequest {
    pub phone: String,
}

// --- Handlers ---

/// List all donors with donation totals
///
/// GET /api/v1/donors
#[utoipa::path(
    get,
    path = "/api/v1/donors",
    responses(
        (status = 200, description = "Donors retrieved", body = ApiResponse<Vec<DonorOverview>>)
    ),
    tag = "Donors"
)]
pub async fn list_donors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<DonorOverview>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match DonorRepository::list_with_stats(state.db.pool()).await {
        Ok(donors) => Ok(Json(ApiResponse::success(
            "Donors retrieved successfully",
            donors,
        ))),
        Err(e) => {
            tracing::error!("Failed to list donors: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error fetching donors")),
            ))
        }
    }
}

/// Register a donor
///
/// POST /api/v1/donors
#[utoipa::path(
    post,
    path = "/api/v1/donors",
    request_body = CreateDonorRequest,
    responses(
        (status = 201, description = "Donor added", body = ApiResponse<Donor>),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Phone number already exists")
    ),
    tag = "Donors"
)]
pub async fn create_donor(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateDonorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Donor>>), (StatusCode, Json<ApiResponse<()>>)> {
    match DonorRepository::create(state.db.pool(), &req.name, &req.phone, req.librarian_id).await {
        Ok(donor) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success("Donor added successfully", donor)),
        )),
        Err(e) => Err(map_donor_error(e)),
    }
}

/// Update a donor's name and phone
///
/// PUT /api/v1/donors/{id}
#[utoipa::path(
    put,
    path = "/api/v1/donors/{id}",
    request_body = UpdateDonorRequest,
    params(("id" = i64, Path, description = "Donor id")),
    responses(
        (status = 200, description = "Donor updated", body = ApiResponse<Donor>),
        (status = 404, description = "Donor not found"),
        (status = 409, description = "Phone number already exists")
    ),
    tag = "Donors"
)]
pub async fn update_donor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateDonorRequest>,
) -> Result<Json<ApiResponse<Donor>>, (StatusCode, Json<ApiResponse<()>>)> {
    match DonorRepository::update(state.db.pool(), id, &req.name, &req.phone).await {
        Ok(donor) => Ok(Json(ApiResponse::success(
            "Donor updated successfully",
            donor,
        ))),
        Err(e) => Err(map_donor_error(e)),
    }
}

/// Delete a donor (refused while donation records reference them)
///
/// DELETE /api/v1/donors/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/donors/{id}",
    params(("id" = i64, Path, description = "Donor id")),
    responses(
        (status = 200, description = "Donor deleted"),
        (status = 404, description = "Donor not found"),
        (status = 409, description = "Donor still has donation records")
    ),
    tag = "Donors"
)]
pub async fn delete_donor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    match DonorRepository::delete(state.db.pool(), id).await {
        Ok(()) => Ok(Json(ApiResponse::success("Donor deleted successfully", ()))),
        Err(e) => Err(map_donor_error(e)),
    }
}

/// Look up a donor by exact phone number
///
/// POST /api/v1/donors/lookup
#[utoipa::path(
    post,
    path = "/api/v1/donors/lookup",
    request_body = DonorLookupRequest,
    responses(
        (status = 200, description = "Donor found", body = ApiResponse<Donor>),
        (status = 404, description = "Donor not found")
    ),
    tag = "Donors"
)]
pub async fn lookup_donor(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DonorLookupRequest>,
) -> Result<Json<ApiResponse<Donor>>, (StatusCode, Json<ApiResponse<()>>)> {
    if req.phone.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("Mobile number is required")),
        ));
    }

    match DonorRepository::find_by_phone(state.db.pool(), &req.phone).await {
        Ok(Some(donor)) => Ok(Json(ApiResponse::success("Donor found", donor))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Donor not found")),
        )),
        Err(e) => {
            tracing::error!("Donor lookup failed: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error searching donor")),
            ))
        }
    }
}

/// Donation history for one donor
///
/// GET /api/v1/donors/{id}/donations
#[utoipa::path(
    get,
    path = "/api/v1/donors/{id}/donations",
    params(("id" = i64, Path, description = "Donor id")),
    responses(
        (status = 200, description = "Donated books retrieved", body = ApiResponse<Vec<DonatedBook>>)
    ),
    tag = "Donors"
)]
pub async fn donated_books(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<DonatedBook>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match DonorRepository::donated_books(state.db.pool(), id).await {
        Ok(books) => Ok(Json(ApiResponse::success(
            "Donated books retrieved successfully",
            books,
        ))),
        Err(e) => {
            tracing::error!("Failed to fetch donated books: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error fetching donated books")),
            ))
        }
    }
}

fn map_donor_error(e: DonorError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &e {
        DonorError::Validation(_) => StatusCode::BAD_REQUEST,
        DonorError::NotFound(_) => StatusCode::NOT_FOUND,
        DonorError::PhoneExists | DonorError::HasDonations => StatusCode::CONFLICT,
        DonorError::Database(_) => {
            tracing::error!("Donor operation failed: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ApiResponse::<()>::error(e.to_string())))
}
