use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        funding::{
            CreateFundingDto, CreatePaymentIntentDto, FundingDto, FundingSummaryDto,
            PaymentIntentDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::funding::CreateFundingParam,
        service::{funding::FundingService, payment::PaymentService},
        state::AppState,
    },
};

/// Tag for grouping funding endpoints in OpenAPI documentation
pub static FUNDING_TAG: &str = "funding";

/// Get every funding, newest first, with the running total.
///
/// # Access Control
/// - Authenticated
#[utoipa::path(
    get,
    path = "/fundings",
    tag = FUNDING_TAG,
    responses(
        (status = 200, description = "Fundings and total amount", body = FundingSummaryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_fundings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .authenticate()
        .await?;

    let service = FundingService::new(&state.db);
    let summary = service.get_summary().await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Record a funding.
///
/// Authenticated callers are recorded under their verified identity. Anonymous callers
/// must supply a donor email; the donor name falls back to "Anonymous".
///
/// # Access Control
/// - Public, credential optional
///
/// # Returns
/// - `201 Created` - The recorded funding
/// - `400 Bad Request` - Non-positive amount or missing donor email
/// - `401 Unauthorized` - A credential was supplied but is invalid
#[utoipa::path(
    post,
    path = "/fundings",
    tag = FUNDING_TAG,
    request_body = CreateFundingDto,
    responses(
        (status = 201, description = "Funding recorded", body = FundingDto),
        (status = 400, description = "Invalid funding data", body = ErrorDto),
        (status = 401, description = "Invalid credential", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_funding(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateFundingDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .authenticate_optional()
        .await?;

    let param = CreateFundingParam::from_dto(identity.as_ref(), payload)?;

    let service = FundingService::new(&state.db);
    let funding = service.create(param).await?;

    Ok((StatusCode::CREATED, Json(funding.into_dto())))
}

/// Create a payment intent for a contribution.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Client secret for confirming the payment
/// - `400 Bad Request` - Amount not positive or below the provider minimum
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Payment provider failure
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    tag = FUNDING_TAG,
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 200, description = "Payment intent created", body = PaymentIntentDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Payment provider failure", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePaymentIntentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, state.identity.as_ref(), &headers)
        .authenticate()
        .await?;

    let service = PaymentService::new(state.payments.as_ref());
    let intent = service.create_payment_intent(payload.amount).await?;

    Ok((StatusCode::OK, Json(intent.into_dto())))
}
