use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::error::InventoryError;
use super::models::{Book, BookOverview, NewBook};
use super::repository::BookRepository;
use crate::donations::models::BookRef;
use crate::donations::{DonationError, DonationService};
use crate::gateway::{state::AppState, types::ApiResponse};

// --- Requests ---

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddBookRequest {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Copies being added (defaults to 1)
    pub copies: Option<i64>,
    pub librarian_id: i64,
    /// When present, the addition is recorded as a donation from this donor
    pub donor_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookRequest {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub available_count: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchBooksQuery {
    /// Title/author substring
    #[serde(default)]
    pub q: String,
    pub librarian_id: Option<i64>,
}

// --- Handlers ---

/// List all books with librarian and donation details
///
/// GET /api/v1/books
#[utoipa::path(
    get,
    path = "/api/v1/books",
    responses(
        (status = 200, description = "Books retrieved", body = ApiResponse<Vec<BookOverview>>)
    ),
    tag = "Books"
)]
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<BookOverview>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match BookRepository::list_with_details(state.db.pool()).await {
        Ok(books) => Ok(Json(ApiResponse::success(
            "Books retrieved successfully",
            books,
        ))),
        Err(e) => {
            tracing::error!("Failed to list books: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error fetching books")),
            ))
        }
    }
}

/// Search books by title/author substring
///
/// GET /api/v1/books/search
#[utoipa::path(
    get,
    path = "/api/v1/books/search",
    params(
        ("q" = Option<String>, Query, description = "Title/author substring"),
        ("librarian_id" = Option<i64>, Query, description = "Limit to one librarian's books")
    ),
    responses(
        (status = 200, description = "Matching books", body = ApiResponse<Vec<Book>>)
    ),
    tag = "Books"
)]
pub async fn search_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchBooksQuery>,
) -> Result<Json<ApiResponse<Vec<Book>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match BookRepository::search(state.db.pool(), &query.q, query.librarian_id).await {
        Ok(books) => Ok(Json(ApiResponse::success(
            "Books retrieved successfully",
            books,
        ))),
        Err(e) => {
            tracing::error!("Book search failed: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Error searching books")),
            ))
        }
    }
}

/// Add a book by (title, author): an existing pair is incremented, a new
/// pair creates one row. With `donor_id` set, a donation is recorded in the
/// same transaction.
///
/// POST /api/v1/books
#[utoipa::path(
    post,
    path = "/api/v1/books",
    request_body = AddBookRequest,
    responses(
        (status = 200, description = "Book added or count updated", body = ApiResponse<Book>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Donor not found")
    ),
    tag = "Books"
)]
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddBookRequest>,
) -> Result<Json<ApiResponse<Book>>, (StatusCode, Json<ApiResponse<()>>)> {
    let copies = req.copies.unwrap_or(1);
    if copies < 1 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Valid book count is required (minimum 1)",
            )),
        ));
    }

    match req.donor_id {
        Some(donor_id) => {
            let book_ref = BookRef::ByName {
                title: req.title,
                author: req.author,
                genre: req.genre,
            };
            match DonationService::record(
                state.db.pool(),
                donor_id,
                req.librarian_id,
                book_ref,
                copies,
            )
            .await
            {
                Ok((_donation, book)) => Ok(Json(ApiResponse::success(
                    "Book added and donation recorded successfully",
                    book,
                ))),
                Err(e) => Err(map_donation_error(e)),
            }
        }
        None => {
            let new = NewBook {
                title: req.title,
                author: req.author,
                genre: req.genre,
                initial_count: copies,
                librarian_id: req.librarian_id,
            };
            match BookRepository::add_by_name(state.db.pool(), &new).await {
                Ok((book, created)) => {
                    let message = if created {
                        "Book added successfully"
                    } else {
                        "Book count updated successfully"
                    };
                    Ok(Json(ApiResponse::success(message, book)))
                }
                Err(e) => Err(map_inventory_error(e)),
            }
        }
    }
}

/// Update book attributes and copy-count
///
/// PUT /api/v1/books/{id}
#[utoipa::path(
    put,
    path = "/api/v1/books/{id}",
    request_body = UpdateBookRequest,
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book updated", body = ApiResponse<Book>),
        (status = 404, description = "Book not found")
    ),
    tag = "Books"
)]
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBookRequest>,
) -> Result<Json<ApiResponse<Book>>, (StatusCode, Json<ApiResponse<()>>)> {
    match BookRepository::update(
        state.db.pool(),
        id,
        &req.title,
        &req.author,
        &req.genre,
        req.available_count,
    )
    .await
    {
        Ok(book) => Ok(Json(ApiResponse::success("Book updated successfully", book))),
        Err(e) => Err(map_inventory_error(e)),
    }
}

/// Delete a book (refused while donation records reference it)
///
/// DELETE /api/v1/books/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/books/{id}",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book still has donation records")
    ),
    tag = "Books"
)]
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    match BookRepository::delete(state.db.pool(), id).await {
        Ok(()) => Ok(Json(ApiResponse::success("Book deleted successfully", ()))),
        Err(e) => Err(map_inventory_error(e)),
    }
}

pub(crate) fn map_inventory_error(e: InventoryError) -> (StatusCode, Json<ApiResponse<()>>) {
    match &e {
        InventoryError::InvalidInput(_) => {
            (StatusCode::BAD_REQUEST, Json(ApiResponse::<()>::error(e.to_string())))
        }
        InventoryError::NotFound(_) => {
            (StatusCode::NOT_FOUND, Json(ApiResponse::<()>::error(e.to_string())))
        }
        InventoryError::Insufficient { .. } | InventoryError::HasDonations => {
            (StatusCode::CONFLICT, Json(ApiResponse::<()>::error(e.to_string())))
        }
        InventoryError::Database(db) => {
            if db.to_string().contains("duplicate key") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<()>::error(
                        "A book with this title and author already exists",
                    )),
                );
            }
            tracing::error!("Book operation failed: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Database error")),
            )
        }
    }
}

fn map_donation_error(e: DonationError) -> (StatusCode, Json<ApiResponse<()>>) {
    match e {
        DonationError::InvalidInput(_) => {
            (StatusCode::BAD_REQUEST, Json(ApiResponse::<()>::error(e.to_string())))
        }
        DonationError::DonorNotFound(_) => {
            (StatusCode::NOT_FOUND, Json(ApiResponse::<()>::error(e.to_string())))
        }
        DonationError::Inventory(inner) | DonationError::Entry { source: inner, .. } => {
            map_inventory_error(inner)
        }
        DonationError::Database(_) => {
            tracing::error!("Donation recording failed: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Database error")),
            )
        }
    }
}
