use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, stats::DashboardStatsDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get dashboard statistics.
///
/// Counts users, donors, donation requests per status and the total funding amount.
///
/// # Access Control
/// - `Admin` - Only admins can read dashboard statistics
///
/// # Returns
/// - `200 OK` - Current totals
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStatsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = AdminService::new(&state.db);
    let stats = service.get_stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
