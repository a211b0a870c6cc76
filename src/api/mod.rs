//! API handlers for the LocalLibrary REST endpoints

pub mod admin;
pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod health;
pub mod languages;
pub mod openapi;

use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// List of records
    pub items: Vec<T>,
    /// Total number of records
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Records per page
    pub per_page: i64,
}

/// Run payload validation, mapping failures to a validation error
pub(crate) fn validate<T: Validate>(payload: &T) -> AppResult<()> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}
