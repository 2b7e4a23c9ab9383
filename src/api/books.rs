//! Book catalog endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, PageRequest},
};

/// Response for batch creation
#[derive(Serialize, ToSchema)]
pub struct BooksCreatedResponse {
    pub message: String,
    pub data: Vec<Book>,
}

/// Response carrying a single book
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub message: String,
    pub data: Book,
}

/// Paginated books response
#[derive(Serialize, ToSchema)]
pub struct BooksListResponse {
    pub message: String,
    pub data: Vec<Book>,
    /// Total number of live records, independent of the requested page
    pub total: i64,
}

/// Confirmation-only response
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Parse a path id as a positive integer
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest("Invalid id".to_string()))
}

/// Create a batch of books
#[utoipa::path(
    post,
    path = "/create_books",
    tag = "books",
    request_body = Vec<CreateBook>,
    responses(
        (status = 201, description = "Books created", body = BooksCreatedResponse),
        (status = 400, description = "Invalid input or validation failure", body = crate::error::ErrorResponse),
        (status = 500, description = "Creation failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_books(
    State(state): State<crate::AppState>,
    payload: Result<Json<Vec<CreateBook>>, JsonRejection>,
) -> AppResult<(StatusCode, Json<BooksCreatedResponse>)> {
    let Json(books) = payload.map_err(|e| {
        tracing::debug!("Rejected create_books payload: {}", e);
        AppError::BadRequest("Invalid input".to_string())
    })?;

    let created = state.services.books.create(&books).await?;

    Ok((
        StatusCode::CREATED,
        Json(BooksCreatedResponse {
            message: "Books created successfully".to_string(),
            data: created,
        }),
    ))
}

/// Soft-delete a book by ID
#[utoipa::path(
    delete,
    path = "/delete_book/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.services.books.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Book deleted successfully".to_string(),
    }))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/get_books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 400, description = "Invalid id", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let id = parse_id(&id)?;
    let book = state.services.books.get_by_id(id).await?;

    Ok(Json(BookResponse {
        message: "Book fetched successfully".to_string(),
        data: book,
    }))
}

/// List books with pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Books list", body = BooksListResponse),
        (status = 400, description = "Bad page or limit parameter", body = crate::error::ErrorResponse),
        (status = 500, description = "Fetch failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<BooksListResponse>> {
    let request = PageRequest::try_from(&query)?;
    let (books, total) = state.services.books.list(request).await?;

    Ok(Json(BooksListResponse {
        message: "Books fetched successfully".to_string(),
        data: books,
        total,
    }))
}
