//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookQuery, BookShort, CreateBook, UpdateBook},
        book_instance::{BookInstance, CreateBookInstance},
    },
    AppState,
};

use super::{validate, PaginatedResponse};

/// List books with search and pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = PaginatedResponse<BookShort>)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<PaginatedResponse<BookShort>>> {
    let (books, total) = state.repository.books.search(&query).await?;

    Ok(Json(PaginatedResponse {
        items: books,
        total,
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20),
    }))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.repository.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    validate(&payload)?;

    let created = state.repository.books.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    validate(&payload)?;

    let updated = state.repository.books.update(id, &payload).await?;
    Ok(Json(updated))
}

/// Delete a book. Its physical copies survive with the book reference nulled.
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.repository.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List all physical copies of a book
#[utoipa::path(
    get,
    path = "/books/{id}/instances",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Copies of this book", body = Vec<BookInstance>),
        (status = 404, description = "Book not found")
    )
)]
pub async fn list_book_instances(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<BookInstance>>> {
    state.repository.books.get_by_id(id).await?;

    let instances = state.repository.book_instances.list_for_book(id).await?;
    Ok(Json(instances))
}

/// Create a new physical copy of a book
#[utoipa::path(
    post,
    path = "/books/{id}/instances",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = CreateBookInstance,
    responses(
        (status = 201, description = "Copy created", body = BookInstance),
        (status = 404, description = "Book not found")
    )
)]
pub async fn create_book_instance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(mut payload): Json<CreateBookInstance>,
) -> AppResult<(StatusCode, Json<BookInstance>)> {
    validate(&payload)?;

    state.repository.books.get_by_id(id).await?;
    payload.book_id = Some(id);

    let created = state.repository.book_instances.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
