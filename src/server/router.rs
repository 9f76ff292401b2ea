//! Route table and OpenAPI documentation.
//!
//! Every handler is registered through `utoipa-axum` so the generated document always
//! matches the served routes. Swagger UI is mounted at `/api/docs`.

use axum::Router;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, donation_request, funding, health, user},
    state::AppState,
};

/// Name of the bearer credential scheme referenced by protected paths.
pub const BEARER_SCHEME: &str = "bearer";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blood Donation API",
        description = "Donor registry, donation request lifecycle and funding"
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "user", description = "Registration, profiles, roles and donor search"),
        (name = "donation-request", description = "Donation request lifecycle"),
        (name = "funding", description = "Fundings and payment intents"),
        (name = "admin", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Builds the application router with every route and the Swagger UI.
pub fn router() -> Router<AppState> {
    let (router, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(user::register_user, user::get_users))
        .routes(routes!(user::get_me, user::update_me))
        .routes(routes!(user::get_user_role))
        .routes(routes!(user::update_user_role))
        .routes(routes!(user::update_user_status))
        .routes(routes!(user::search_donors))
        .routes(routes!(
            donation_request::create_donation_request,
            donation_request::get_donation_requests
        ))
        .routes(routes!(donation_request::get_pending_requests))
        .routes(routes!(donation_request::get_my_requests))
        .routes(routes!(
            donation_request::get_donation_request,
            donation_request::update_donation_request,
            donation_request::delete_donation_request
        ))
        .routes(routes!(donation_request::donate))
        .routes(routes!(donation_request::update_donation_status))
        .routes(routes!(funding::get_fundings, funding::create_funding))
        .routes(routes!(funding::create_payment_intent))
        .routes(routes!(admin::get_stats))
        .split_for_parts();

    add_bearer_scheme(&mut api);

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

fn add_bearer_scheme(api: &mut utoipa::openapi::OpenApi) {
    let components = api.components.get_or_insert_with(Default::default);
    components.security_schemes.insert(
        BEARER_SCHEME.to_string(),
        SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
    );
}
