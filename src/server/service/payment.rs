//! Payment authorization through an external payment provider.
//!
//! The provider owns the currency and the minimum contribution. The application never
//! verifies that a payment completed; it only hands the client a secret to confirm one.

use async_trait::async_trait;
use dioxus_logger::tracing;
use serde::Deserialize;

use crate::server::{
    error::{payment::PaymentError, AppError},
    model::funding::PaymentIntent,
};

/// Creates payment intents for contributions.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Creates a payment intent for `amount` whole currency units.
    ///
    /// # Returns
    /// - `Ok(PaymentIntent)` - Intent created; carries the client confirmation secret
    /// - `Err(PaymentError::BelowMinimum | AmountTooLarge)` - Amount cannot be charged
    /// - `Err(PaymentError::Rejected | Request)` - Provider failure
    async fn create_payment_intent(&self, amount: i64) -> Result<PaymentIntent, PaymentError>;
}

/// Payment provider backed by the Stripe `payment_intents` REST endpoint.
pub struct StripePaymentProvider {
    http_client: reqwest::Client,
    api_url: String,
    secret_key: String,
    currency: String,
    minimum_amount: i64,
}

#[derive(Deserialize)]
struct StripePaymentIntent {
    id: String,
    client_secret: String,
}

#[derive(Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Deserialize)]
struct StripeErrorDetail {
    message: String,
}

impl StripePaymentProvider {
    pub const API_URL: &'static str = "https://api.stripe.com/v1/payment_intents";

    pub fn new(
        http_client: reqwest::Client,
        secret_key: String,
        currency: String,
        minimum_amount: i64,
    ) -> Self {
        Self {
            http_client,
            api_url: Self::API_URL.to_string(),
            secret_key,
            currency,
            minimum_amount,
        }
    }
}

/// Currencies the provider charges in whole units.
const ZERO_DECIMAL_CURRENCIES: &[&str] = &[
    "bif", "clp", "djf", "gnf", "jpy", "kmf", "krw", "mga", "pyg", "rwf", "ugx", "vnd", "vuv",
    "xaf", "xof", "xpf",
];
/// Currencies the provider charges in thousandths.
const THREE_DECIMAL_CURRENCIES: &[&str] = &["bhd", "jod", "kwd", "omr", "tnd"];

/// Number of minor units in one whole unit of `currency` (lowercase ISO code).
fn minor_unit_factor(currency: &str) -> i64 {
    if ZERO_DECIMAL_CURRENCIES.contains(&currency) {
        1
    } else if THREE_DECIMAL_CURRENCIES.contains(&currency) {
        1000
    } else {
        100
    }
}

/// Converts whole currency units to the provider's minor unit for `currency`.
fn to_minor_units(amount: i64, minimum: i64, currency: &str) -> Result<i64, PaymentError> {
    if amount < minimum {
        return Err(PaymentError::BelowMinimum { minimum });
    }
    amount
        .checked_mul(minor_unit_factor(currency))
        .ok_or(PaymentError::AmountTooLarge(amount))
}

#[async_trait]
impl PaymentProvider for StripePaymentProvider {
    async fn create_payment_intent(&self, amount: i64) -> Result<PaymentIntent, PaymentError> {
        let minor_units = to_minor_units(amount, self.minimum_amount, &self.currency)?;

        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(&self.secret_key)
            .form(&[
                ("amount", minor_units.to_string()),
                ("currency", self.currency.clone()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<StripeErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| "unreadable error body".to_string());
            return Err(PaymentError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let intent = response.json::<StripePaymentIntent>().await?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
        })
    }
}

/// Service wrapping the configured payment provider.
pub struct PaymentService<'a> {
    provider: &'a dyn PaymentProvider,
}

impl<'a> PaymentService<'a> {
    pub fn new(provider: &'a dyn PaymentProvider) -> Self {
        Self { provider }
    }

    /// Requests a payment intent for a contribution of `amount`.
    ///
    /// # Returns
    /// - `Ok(PaymentIntent)` - Intent created
    /// - `Err(AppError::BadRequest)` - Amount is not positive
    /// - `Err(AppError::PaymentErr)` - Provider refused or failed
    pub async fn create_payment_intent(&self, amount: i64) -> Result<PaymentIntent, AppError> {
        if amount <= 0 {
            return Err(AppError::BadRequest(
                "Amount must be a positive whole number".to_string(),
            ));
        }

        let intent = self.provider.create_payment_intent(amount).await?;
        tracing::info!("Created payment intent {} for {}", intent.id, amount);

        Ok(intent)
    }
}

/// Payment provider that records requested amounts and returns canned intents.
#[cfg(test)]
pub struct RecordingPaymentProvider {
    minimum_amount: i64,
    requested: std::sync::Mutex<Vec<i64>>,
}

#[cfg(test)]
impl RecordingPaymentProvider {
    pub fn new(minimum_amount: i64) -> Self {
        Self {
            minimum_amount,
            requested: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<i64> {
        self.requested.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl PaymentProvider for RecordingPaymentProvider {
    async fn create_payment_intent(&self, amount: i64) -> Result<PaymentIntent, PaymentError> {
        to_minor_units(amount, self.minimum_amount, "usd")?;
        self.requested.lock().unwrap().push(amount);

        Ok(PaymentIntent {
            id: format!("pi_{}", amount),
            client_secret: format!("pi_{}_secret", amount),
        })
    }
}
