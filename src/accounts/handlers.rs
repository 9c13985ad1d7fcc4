use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::error::AccountError;
use super::models::{LibrarianOverview, Role};
use super::repository::AccountRepository;
use super::service::{AuthResponse, LoginRequest};
use crate::gateway::{state::AppState, types::ApiResponse};

// --- Requests ---

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLibrarianRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLibrarianRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Leave empty to keep the current password
    pub password: Option<String>,
}

// --- Handlers ---

/// Librarian login
///
/// POST /api/v1/auth/login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn librarian_login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    login(state, req, Role::Librarian).await
}

/// Admin login
///
/// POST /api/v1/auth/admin/login
#[utoipa::path(
    post,
    path = "/api/v1/auth/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthResponse>),
        (status = 401, description = "Invalid credentials or insufficient permissions")
    ),
    tag = "Auth"
)]
pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    login(state, req, Role::Admin).await
}

async fn login(
    state: Arc<AppState>,
    req: LoginRequest,
    role: Role,
) -> Result<Json<ApiResponse<AuthResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Email and password cannot be empty",
            )),
        ));
    }

    match state.auth.login(req, role).await {
        Ok(resp) => Ok(Json(ApiResponse::success("Login successful", resp))),
        Err(e) => {
            tracing::warn!(role = %role, "Login failed: {:?}", e);
            Err((
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<()>::error("Invalid credentials")),
            ))
        }
    }
}

/// List librarians with activity counts
///
/// GET /api/v1/librarians
#[utoipa::path(
    get,
    path = "/api/v1/librarians",
    responses(
        (status = 200, description = "Librarians retrieved", body = ApiResponse<Vec<LibrarianOverview>>)
    ),
    tag = "Librarians"
)]
pub async fn list_librarians(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<LibrarianOverview>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match AccountRepository::list_librarians(state.db.pool()).await {
        Ok(librarians) => Ok(Json(ApiResponse::success(
            "Librarians retrieved successfully",
            librarians,
        ))),
        Err(e) => {
            tracing::error!("Failed to list librarians: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error fetching librarians")),
            ))
        }
    }
}

/// Add a librarian
///
/// POST /api/v1/librarians
#[utoipa::path(
    post,
    path = "/api/v1/librarians",
    request_body = CreateLibrarianRequest,
    responses(
        (status = 201, description = "Librarian added", body = ApiResponse<LibrarianOverview>),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email or phone already exists")
    ),
    tag = "Librarians"
)]
pub async fn create_librarian(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateLibrarianRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LibrarianOverview>>), (StatusCode, Json<ApiResponse<()>>)>
{
    match AccountRepository::create_librarian(
        state.db.pool(),
        &req.name,
        &req.email,
        &req.phone,
        &req.password,
    )
    .await
    {
        Ok(librarian) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success("Librarian added successfully", librarian)),
        )),
        Err(e) => Err(map_account_error(e)),
    }
}

/// Update a librarian
///
/// PUT /api/v1/librarians/{id}
#[utoipa::path(
    put,
    path = "/api/v1/librarians/{id}",
    request_body = UpdateLibrarianRequest,
    params(("id" = i64, Path, description = "Librarian account id")),
    responses(
        (status = 200, description = "Librarian updated", body = ApiResponse<LibrarianOverview>),
        (status = 404, description = "Librarian not found"),
        (status = 409, description = "Email or phone already exists")
    ),
    tag = "Librarians"
)]
pub async fn update_librarian(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateLibrarianRequest>,
) -> Result<Json<ApiResponse<LibrarianOverview>>, (StatusCode, Json<ApiResponse<()>>)> {
    match AccountRepository::update_librarian(
        state.db.pool(),
        id,
        &req.name,
        &req.email,
        &req.phone,
        req.password.as_deref(),
    )
    .await
    {
        Ok(librarian) => Ok(Json(ApiResponse::success(
            "Librarian updated successfully",
            librarian,
        ))),
        Err(e) => Err(map_account_error(e)),
    }
}

/// Delete a librarian (refused while books, donors or certificates
/// reference them)
///
/// DELETE /api/v1/librarians/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/librarians/{id}",
    params(("id" = i64, Path, description = "Librarian account id")),
    responses(
        (status = 200, description = "Librarian deleted"),
        (status = 404, description = "Librarian not found"),
        (status = 409, description = "Librarian still has dependent records")
    ),
    tag = "Librarians"
)]
pub async fn delete_librarian(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    match AccountRepository::delete_librarian(state.db.pool(), id).await {
        Ok(()) => Ok(Json(ApiResponse::success(
            "Librarian deleted successfully",
            (),
        ))),
        Err(e) => Err(map_account_error(e)),
    }
}

fn map_account_error(e: AccountError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &e {
        AccountError::Validation(_) => StatusCode::BAD_REQUEST,
        AccountError::NotFound(_) => StatusCode::NOT_FOUND,
        AccountError::EmailExists
        | AccountError::PhoneExists
        | AccountError::HasBooks
        | AccountError::HasDonors
        | AccountError::HasCertificates => StatusCode::CONFLICT,
        AccountError::Database(_) | AccountError::Hash(_) => {
            tracing::error!("Librarian operation failed: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ApiResponse::<()>::error(e.to_string())))
}
