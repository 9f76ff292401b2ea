use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header was sent.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing authorization header")]
    MissingToken,

    /// The `Authorization` header is not valid UTF-8, does not use the Bearer scheme,
    /// or carries an empty token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid authorization header: {0}")]
    InvalidHeader(String),

    /// The identity provider rejected the bearer credential.
    ///
    /// Covers malformed, expired, revoked and disabled-account tokens. Results in a
    /// 401 Unauthorized response.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// The authenticated caller has no stored user record.
    ///
    /// Role and status checks read the users table, so a verified identity that never
    /// registered cannot satisfy them. Results in a 403 Forbidden response.
    #[error("User {0} not found in database")]
    UserNotInDatabase(String),

    /// The caller's stored role does not grant the required permission.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(String, String),

    /// The caller's account has been blocked by an admin.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} is blocked")]
    AccountBlocked(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly messages:
/// - `MissingToken` / `InvalidHeader` / `InvalidToken` → 401 Unauthorized
/// - `UserNotInDatabase` / `AccessDenied` → 403 Forbidden with "Access denied"
/// - `AccountBlocked` → 403 Forbidden with a blocked-account message
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Missing authorization token"),
            Self::InvalidHeader(_) => (StatusCode::UNAUTHORIZED, "Invalid authorization header"),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
            Self::UserNotInDatabase(_) | Self::AccessDenied(_, _) => {
                (StatusCode::FORBIDDEN, "Access denied")
            }
            Self::AccountBlocked(_) => (StatusCode::FORBIDDEN, "Your account has been blocked"),
        };

        (
            status,
            Json(ErrorDto {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}
