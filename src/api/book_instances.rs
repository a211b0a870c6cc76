//! Book instance (physical copy) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book_instance::{BookInstance, BookInstanceQuery, UpdateBookInstance},
    AppState,
};

use super::{validate, PaginatedResponse};

/// List copies, ordered by due date (unset dates first), with the
/// status/due-date filters of the admin list view
#[utoipa::path(
    get,
    path = "/instances",
    tag = "instances",
    params(BookInstanceQuery),
    responses(
        (status = 200, description = "List of copies", body = PaginatedResponse<BookInstance>)
    )
)]
pub async fn list_instances(
    State(state): State<AppState>,
    Query(query): Query<BookInstanceQuery>,
) -> AppResult<Json<PaginatedResponse<BookInstance>>> {
    let (instances, total) = state.repository.book_instances.list(&query).await?;

    Ok(Json(PaginatedResponse {
        items: instances,
        total,
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20),
    }))
}

/// Get copy details by ID
#[utoipa::path(
    get,
    path = "/instances/{id}",
    tag = "instances",
    params(("id" = Uuid, Path, description = "Copy ID")),
    responses(
        (status = 200, description = "Copy details", body = BookInstance),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn get_instance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookInstance>> {
    let instance = state.repository.book_instances.get_by_id(id).await?;
    Ok(Json(instance))
}

/// Update an existing copy
#[utoipa::path(
    put,
    path = "/instances/{id}",
    tag = "instances",
    params(("id" = Uuid, Path, description = "Copy ID")),
    request_body = UpdateBookInstance,
    responses(
        (status = 200, description = "Copy updated", body = BookInstance),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn update_instance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookInstance>,
) -> AppResult<Json<BookInstance>> {
    validate(&payload)?;

    let updated = state.repository.book_instances.update(id, &payload).await?;
    Ok(Json(updated))
}

/// Delete a copy
#[utoipa::path(
    delete,
    path = "/instances/{id}",
    tag = "instances",
    params(("id" = Uuid, Path, description = "Copy ID")),
    responses(
        (status = 204, description = "Copy deleted"),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn delete_instance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.repository.book_instances.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark an on-loan copy as returned. In a deployment with an auth layer
/// this action is gated by the `can_mark_returned` permission.
#[utoipa::path(
    post,
    path = "/instances/{id}/return",
    tag = "instances",
    params(("id" = Uuid, Path, description = "Copy ID")),
    responses(
        (status = 200, description = "Copy returned", body = BookInstance),
        (status = 404, description = "Copy not found"),
        (status = 422, description = "Copy is not on loan")
    )
)]
pub async fn return_instance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookInstance>> {
    let returned = state.repository.book_instances.mark_returned(id).await?;
    Ok(Json(returned))
}
