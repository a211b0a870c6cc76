//! Admin configuration endpoint.
//!
//! Serves the declarative admin-site configuration (list columns, filters,
//! fieldsets, inline relations) for the external admin UI to render.

use axum::Json;

use crate::admin::{self, ModelAdmin};

/// Get the admin declarations for every record type
#[utoipa::path(
    get,
    path = "/admin/config",
    tag = "admin",
    responses(
        (status = 200, description = "Admin declarations per record type", body = Vec<ModelAdmin>)
    )
)]
pub async fn get_admin_config() -> Json<Vec<ModelAdmin>> {
    Json(admin::site())
}
