use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures reported by the payment provider.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// The requested contribution is below the configured minimum.
    #[error("Minimum contribution is {minimum}")]
    BelowMinimum {
        /// Smallest accepted amount in whole currency units
        minimum: i64,
    },

    /// The amount cannot be represented in the provider's minor currency unit.
    #[error("Amount {0} is too large")]
    AmountTooLarge(i64),

    /// The provider refused to create the payment intent.
    #[error("payment provider returned status {status}: {message}")]
    Rejected {
        /// HTTP status returned by the provider
        status: u16,
        /// Provider-supplied error message
        message: String,
    },

    /// The provider could not be reached or returned an unreadable body.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Converts payment errors into HTTP responses.
///
/// Amount validation failures are 400 with the error message; provider failures are
/// logged and returned as a generic 500.
impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        match self {
            Self::BelowMinimum { .. } | Self::AmountTooLarge(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    message: self.to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("Payment provider error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
