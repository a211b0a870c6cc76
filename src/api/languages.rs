//! Language endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::language::{CreateLanguage, Language, UpdateLanguage},
    AppState,
};

use super::validate;

/// List all languages
#[utoipa::path(
    get,
    path = "/languages",
    tag = "languages",
    responses(
        (status = 200, description = "List of languages", body = Vec<Language>)
    )
)]
pub async fn list_languages(State(state): State<AppState>) -> AppResult<Json<Vec<Language>>> {
    let languages = state.repository.languages.list().await?;
    Ok(Json(languages))
}

/// Get language by ID
#[utoipa::path(
    get,
    path = "/languages/{id}",
    tag = "languages",
    params(("id" = i32, Path, description = "Language ID")),
    responses(
        (status = 200, description = "Language details", body = Language),
        (status = 404, description = "Language not found")
    )
)]
pub async fn get_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Language>> {
    let language = state.repository.languages.get_by_id(id).await?;
    Ok(Json(language))
}

/// Create a new language
#[utoipa::path(
    post,
    path = "/languages",
    tag = "languages",
    request_body = CreateLanguage,
    responses(
        (status = 201, description = "Language created", body = Language),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_language(
    State(state): State<AppState>,
    Json(payload): Json<CreateLanguage>,
) -> AppResult<(StatusCode, Json<Language>)> {
    validate(&payload)?;

    let created = state.repository.languages.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing language
#[utoipa::path(
    put,
    path = "/languages/{id}",
    tag = "languages",
    params(("id" = i32, Path, description = "Language ID")),
    request_body = UpdateLanguage,
    responses(
        (status = 200, description = "Language updated", body = Language),
        (status = 404, description = "Language not found")
    )
)]
pub async fn update_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLanguage>,
) -> AppResult<Json<Language>> {
    validate(&payload)?;

    let updated = state.repository.languages.update(id, &payload).await?;
    Ok(Json(updated))
}

/// Delete a language
#[utoipa::path(
    delete,
    path = "/languages/{id}",
    tag = "languages",
    params(("id" = i32, Path, description = "Language ID")),
    responses(
        (status = 204, description = "Language deleted"),
        (status = 404, description = "Language not found")
    )
)]
pub async fn delete_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.repository.languages.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
