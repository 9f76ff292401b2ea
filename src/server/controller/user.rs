use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        user::{
            PaginatedUsersDto, RegisterUserDto, UpdateProfileDto, UpdateUserRoleDto,
            UpdateUserStatusDto, UserDto, UserRoleStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            pagination::PageRequest,
            user::{
                DonorSearchParam, GetUsersParam, RegisterUserParam, UpdateProfileParam, UserRole,
                UserStatus,
            },
        },
        service::user::UserService,
        state::AppState,
        util::{
            normalize::normalize_email,
            parse::{non_blank, parse_id, parse_input},
        },
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize)]
pub struct UserListQuery {
    pub status: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorSearchQuery {
    pub blood_group: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
}

/// Register a user.
///
/// Registration is idempotent by email: a repeat registration returns the stored user
/// unchanged. New users always start as active donors regardless of the payload.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - User registered by this request
/// - `200 OK` - A user with this email already existed
/// - `400 Bad Request` - Missing or malformed email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 200, description = "User already registered", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterUserParam::from_dto(payload)?;

    let service = UserService::new(&state.db);
    let registration = service.register(param).await?;

    let status = if registration.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(registration.user.into_dto())))
}

/// Get paginated users, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Page of users with pagination summary
/// - `400 Bad Request` - Unknown status filter
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(
        ("status" = Option<String>, Query, description = "Filter by account status (active, blocked)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedUsersDto),
        (status = 400, description = "Invalid status filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    let status = match non_blank(query.status) {
        Some(status) => Some(parse_input::<UserStatus>("status", &status)?),
        None => None,
    };
    let param = GetUsersParam {
        status,
        page: PageRequest::from_query(query.page.as_deref(), query.limit.as_deref()),
    };

    let service = UserService::new(&state.db);
    let users = service.get_paginated(param).await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Get the caller's own profile.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - The caller's profile
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - The caller has not registered
#[utoipa::path(
    get,
    path = "/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Caller's profile", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .authenticate()
        .await?;

    let service = UserService::new(&state.db);
    let user = service.get_profile(&identity.email).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the caller's own profile.
///
/// Only name, blood group, district, upazila and photo URL can be changed; other
/// fields in the payload are ignored.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - The updated profile
/// - `400 Bad Request` - No editable field supplied
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - The caller has not registered
#[utoipa::path(
    patch,
    path = "/users/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "No editable fields supplied", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .authenticate()
        .await?;

    let service = UserService::new(&state.db);
    let user = service
        .update_profile(&identity.email, UpdateProfileParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Look up the role and status for an email.
///
/// Unregistered emails report `donor` / `active`.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/users/role/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "Email address to look up")
    ),
    responses(
        (status = 200, description = "Role and status", body = UserRoleStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);
    let role_status = service.get_role_status(&normalize_email(&email)).await?;

    Ok((StatusCode::OK, Json(role_status.into_dto())))
}

/// Change a user's role.
///
/// # Access Control
/// - `Admin` - Only admins can change roles
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid id or role
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not an admin
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    patch,
    path = "/users/{id}/role",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    request_body = UpdateUserRoleDto,
    responses(
        (status = 200, description = "Role updated", body = UserDto),
        (status = 400, description = "Invalid id or role", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id)?;
    let role = parse_input::<UserRole>("role", &payload.role)?;

    let service = UserService::new(&state.db);
    let user = service.set_role(id, role).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Block or unblock a user.
///
/// # Access Control
/// - `Admin` - Only admins can change account status
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid id or status
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not an admin
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    patch,
    path = "/users/{id}/status",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    request_body = UpdateUserStatusDto,
    responses(
        (status = 200, description = "Status updated", body = UserDto),
        (status = 400, description = "Invalid id or status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_user_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id)?;
    let status = parse_input::<UserStatus>("status", &payload.status)?;

    let service = UserService::new(&state.db);
    let user = service.set_status(id, status).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Search active donors.
///
/// Every supplied filter must match exactly. Blocked users and admins are excluded.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/donors/search",
    tag = USER_TAG,
    params(
        ("bloodGroup" = Option<String>, Query, description = "Blood group, e.g. O+"),
        ("district" = Option<String>, Query, description = "District"),
        ("upazila" = Option<String>, Query, description = "Upazila")
    ),
    responses(
        (status = 200, description = "Matching donors", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_donors(
    State(state): State<AppState>,
    Query(query): Query<DonorSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let param = DonorSearchParam::new(query.blood_group, query.district, query.upazila);

    let service = UserService::new(&state.db);
    let donors: Vec<UserDto> = service
        .search_donors(param)
        .await?
        .into_iter()
        .map(|u| u.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(donors)))
}
