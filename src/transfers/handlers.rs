use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::error::TransferError;
use super::models::{CreateTransferRequest, TransferDetails};
use super::service::TransferService;
use crate::books::models::Book;
use crate::books::repository::BookRepository;
use crate::gateway::{state::AppState, types::ApiResponse};

/// List all transfers with book details
///
/// GET /api/v1/transfers
#[utoipa::path(
    get,
    path = "/api/v1/transfers",
    responses(
        (status = 200, description = "Transfers retrieved", body = ApiResponse<Vec<TransferDetails>>)
    ),
    tag = "Transfers"
)]
pub async fn list_transfers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<TransferDetails>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match TransferService::list(state.db.pool()).await {
        Ok(transfers) => Ok(Json(ApiResponse::success(
            "Transfers fetched successfully",
            transfers,
        ))),
        Err(e) => {
            tracing::error!("Failed to list transfers: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error fetching transfers")),
            ))
        }
    }
}

/// Books with copies available to transfer
///
/// GET /api/v1/transfers/books
#[utoipa::path(
    get,
    path = "/api/v1/transfers/books",
    responses(
        (status = 200, description = "Transferable books", body = ApiResponse<Vec<Book>>)
    ),
    tag = "Transfers"
)]
pub async fn transferable_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Book>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match BookRepository::list_transferable(state.db.pool()).await {
        Ok(books) => Ok(Json(ApiResponse::success(
            "Books fetched successfully",
            books,
        ))),
        Err(e) => {
            tracing::error!("Failed to list transferable books: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error fetching books")),
            ))
        }
    }
}

/// Create a transfer, debiting the book's copy-count
///
/// POST /api/v1/transfers
#[utoipa::path(
    post,
    path = "/api/v1/transfers",
    request_body = CreateTransferRequest,
    responses(
        (status = 201, description = "Transfer created", body = ApiResponse<TransferDetails>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Not enough copies available")
    ),
    tag = "Transfers"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTransferRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TransferDetails>>), (StatusCode, Json<ApiResponse<()>>)>
{
    match TransferService::create(state.db.pool(), req.book_id, &req.destination, req.copies).await
    {
        Ok(transfer) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success("Transfer added successfully", transfer)),
        )),
        Err(e) => Err(map_transfer_error(e)),
    }
}

/// Delete a transfer, restoring the recorded copies to the book
///
/// DELETE /api/v1/transfers/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/transfers/{id}",
    params(("id" = i64, Path, description = "Transfer id")),
    responses(
        (status = 200, description = "Transfer deleted and copies restored"),
        (status = 404, description = "Transfer not found")
    ),
    tag = "Transfers"
)]
pub async fn delete_transfer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    match TransferService::delete(state.db.pool(), id).await {
        Ok(()) => Ok(Json(ApiResponse::success(
            "Transfer deleted successfully",
            (),
        ))),
        Err(e) => Err(map_transfer_error(e)),
    }
}

fn map_transfer_error(e: TransferError) -> (StatusCode, Json<ApiResponse<()>>) {
    use crate::books::InventoryError;

    let status = match &e {
        TransferError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        TransferError::NotFound(_) => StatusCode::NOT_FOUND,
        TransferError::Inventory(inner) => match inner {
            InventoryError::NotFound(_) => StatusCode::NOT_FOUND,
            InventoryError::Insufficient { .. } | InventoryError::HasDonations => {
                StatusCode::CONFLICT
            }
            InventoryError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            InventoryError::Database(_) => {
                tracing::error!("Transfer operation failed: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        },
        TransferError::Database(_) => {
            tracing::error!("Transfer operation failed: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ApiResponse::<()>::error(e.to_string())))
}
