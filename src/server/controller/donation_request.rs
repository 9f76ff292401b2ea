use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        donation_request::{
            CreateDonationRequestDto, DonationRequestDto, PaginatedDonationRequestsDto,
            UpdateDonationRequestDto, UpdateDonationStatusDto,
        },
    },
    server::{
        config::ListingAccess,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            donation_request::{
                ClaimDonationParam, CloseDonationParam, CreateDonationRequestParam,
                DonationRequestFilter, DonationStatus, MyRequestsParam,
                UpdateDonationRequestParam,
            },
            pagination::PageRequest,
        },
        service::donation_request::DonationRequestService,
        state::AppState,
        util::parse::{non_blank, parse_id, parse_input},
    },
};

/// Tag for grouping donation request endpoints in OpenAPI documentation
pub static DONATION_REQUEST_TAG: &str = "donation-request";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequestQuery {
    pub status: Option<String>,
    pub blood_group: Option<String>,
    pub district: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Deserialize)]
pub struct MyRequestsQuery {
    pub status: Option<String>,
    pub limit: Option<String>,
}

/// Create a donation request.
///
/// The request starts `pending`. The requester is the authenticated caller; requester,
/// status and donor fields in the payload are ignored.
///
/// # Access Control
/// - `Active` - Caller must be registered and not blocked
///
/// # Returns
/// - `201 Created` - The new request
/// - `400 Bad Request` - A required field is blank
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated, unregistered or blocked
#[utoipa::path(
    post,
    path = "/donation-requests",
    tag = DONATION_REQUEST_TAG,
    request_body = CreateDonationRequestDto,
    responses(
        (status = 201, description = "Donation request created", body = DonationRequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Unregistered or blocked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_donation_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDonationRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let requester = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .require(&[Permission::Active])
        .await?;

    let param = CreateDonationRequestParam::from_dto(&requester, payload)?;

    let service = DonationRequestService::new(&state.db);
    let request = service.create(param).await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// Get a filtered page of all donation requests, newest first.
///
/// # Access Control
/// - `Admin` by default; public when `REQUEST_LISTING_ACCESS=public`
///
/// # Returns
/// - `200 OK` - Page of requests with pagination summary
/// - `400 Bad Request` - Unknown status filter
/// - `401 Unauthorized` / `403 Forbidden` - Admin access required
#[utoipa::path(
    get,
    path = "/donation-requests",
    tag = DONATION_REQUEST_TAG,
    params(
        ("status" = Option<String>, Query, description = "pending, inprogress, done or canceled"),
        ("bloodGroup" = Option<String>, Query, description = "Exact blood group, e.g. O+"),
        ("district" = Option<String>, Query, description = "Case-insensitive district substring"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved donation requests", body = PaginatedDonationRequestsDto),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_donation_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DonationRequestQuery>,
) -> Result<impl IntoResponse, AppError> {
    if state.request_listing_access == ListingAccess::Admin {
        let _ = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
            .require(&[Permission::Admin])
            .await?;
    }

    let filter = DonationRequestFilter::from_query(query.status, query.blood_group, query.district)?;
    let page = PageRequest::from_query(query.page.as_deref(), query.limit.as_deref());

    let service = DonationRequestService::new(&state.db);
    let requests = service.get_filtered(filter, page).await?;

    Ok((StatusCode::OK, Json(requests.into_dto())))
}

/// Get a page of pending donation requests, newest first.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/donation-requests/pending",
    tag = DONATION_REQUEST_TAG,
    params(
        ("bloodGroup" = Option<String>, Query, description = "Exact blood group, e.g. O+"),
        ("district" = Option<String>, Query, description = "Case-insensitive district substring"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Pending donation requests", body = PaginatedDonationRequestsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_requests(
    State(state): State<AppState>,
    Query(query): Query<DonationRequestQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = DonationRequestFilter {
        status: Some(DonationStatus::Pending),
        ..DonationRequestFilter::from_query(None, query.blood_group, query.district)?
    };
    let page = PageRequest::from_query(query.page.as_deref(), query.limit.as_deref());

    let service = DonationRequestService::new(&state.db);
    let requests = service.get_filtered(filter, page).await?;

    Ok((StatusCode::OK, Json(requests.into_dto())))
}

/// Get the caller's own donation requests, newest first.
///
/// # Access Control
/// - Authenticated
#[utoipa::path(
    get,
    path = "/donation-requests/mine",
    tag = DONATION_REQUEST_TAG,
    params(
        ("status" = Option<String>, Query, description = "Optional status filter"),
        ("limit" = Option<u64>, Query, description = "Maximum number of requests to return")
    ),
    responses(
        (status = 200, description = "Caller's donation requests", body = Vec<DonationRequestDto>),
        (status = 400, description = "Invalid status filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_my_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<MyRequestsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .authenticate()
        .await?;

    let status = match non_blank(query.status) {
        Some(status) => Some(parse_input::<DonationStatus>("status", &status)?),
        None => None,
    };
    let limit = query
        .limit
        .and_then(|limit| limit.trim().parse::<u64>().ok())
        .filter(|limit| *limit > 0);

    let service = DonationRequestService::new(&state.db);
    let requests: Vec<DonationRequestDto> = service
        .get_mine(MyRequestsParam {
            requester_email: identity.email,
            status,
            limit,
        })
        .await?
        .into_iter()
        .map(|r| r.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(requests)))
}

/// Get a donation request by id.
///
/// # Access Control
/// - Authenticated
#[utoipa::path(
    get,
    path = "/donation-requests/{id}",
    tag = DONATION_REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Donation request id")
    ),
    responses(
        (status = 200, description = "The donation request", body = DonationRequestDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Donation request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_donation_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .authenticate()
        .await?;

    let id = parse_id(&id)?;

    let service = DonationRequestService::new(&state.db);
    let request = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Edit a pending donation request.
///
/// Only the descriptive fields can change; anything else in the payload is dropped.
///
/// # Access Control
/// - Owner of the request, while it is pending
///
/// # Returns
/// - `200 OK` - The edited request
/// - `400 Bad Request` - Invalid id, no editable fields, or request not pending
/// - `403 Forbidden` - Caller is not the requester
/// - `404 Not Found` - Missing, or changed concurrently
#[utoipa::path(
    patch,
    path = "/donation-requests/{id}",
    tag = DONATION_REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Donation request id")
    ),
    request_body = UpdateDonationRequestDto,
    responses(
        (status = 200, description = "Donation request updated", body = DonationRequestDto),
        (status = 400, description = "Invalid id or request not editable", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the requester", body = ErrorDto),
        (status = 404, description = "Donation request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_donation_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateDonationRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .authenticate()
        .await?;

    let id = parse_id(&id)?;

    let service = DonationRequestService::new(&state.db);
    let request = service
        .update(
            id,
            &identity.email,
            UpdateDonationRequestParam::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Delete a donation request.
///
/// # Access Control
/// - `Admin` for any request, otherwise the owner of a pending request
#[utoipa::path(
    delete,
    path = "/donation-requests/{id}",
    tag = DONATION_REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Donation request id")
    ),
    responses(
        (status = 200, description = "Donation request deleted", body = MessageDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to delete", body = ErrorDto),
        (status = 404, description = "Donation request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_donation_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .require(&[])
        .await?;

    let id = parse_id(&id)?;

    let service = DonationRequestService::new(&state.db);
    service.delete(id, &caller).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Donation request deleted".to_string(),
        }),
    ))
}

/// Claim a pending donation request.
///
/// Succeeds only while the request is still pending; of two concurrent claims exactly
/// one wins and the other receives 404.
///
/// # Access Control
/// - `Active` - Caller must be registered and not blocked, and must not be the requester
#[utoipa::path(
    patch,
    path = "/donation-requests/{id}/donate",
    tag = DONATION_REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Donation request id")
    ),
    responses(
        (status = 200, description = "Donation request claimed", body = DonationRequestDto),
        (status = 400, description = "Invalid id or own request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Unregistered or blocked", body = ErrorDto),
        (status = 404, description = "Donation request not found or already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn donate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let donor = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .require(&[Permission::Active])
        .await?;

    let id = parse_id(&id)?;
    let donor_name = if donor.name.is_empty() {
        donor.email.clone()
    } else {
        donor.name
    };

    let service = DonationRequestService::new(&state.db);
    let request = service
        .claim(ClaimDonationParam {
            id,
            donor_name,
            donor_email: donor.email,
        })
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Close out a donation request as done or canceled.
///
/// `canceled` is reachable from `pending` or `inprogress`; `done` only from `inprogress`.
///
/// # Access Control
/// - Owner of the request
#[utoipa::path(
    patch,
    path = "/donation-requests/{id}/status",
    tag = DONATION_REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Donation request id")
    ),
    request_body = UpdateDonationStatusDto,
    responses(
        (status = 200, description = "Status updated", body = DonationRequestDto),
        (status = 400, description = "Invalid id, status or transition", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the requester", body = ErrorDto),
        (status = 404, description = "Donation request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_donation_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateDonationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .authenticate()
        .await?;

    let id = parse_id(&id)?;
    let param = CloseDonationParam::new(id, identity.email, &payload.status)?;

    let service = DonationRequestService::new(&state.db);
    let request = service.close(param).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}
