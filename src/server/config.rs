use std::{fmt::Display, str::FromStr};

use dioxus_logger::tracing::Level;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://blood_db.sqlite?mode=rwc";
const DEFAULT_IDENTITY_LOOKUP_URL: &str =
    "https://identitytoolkit.googleapis.com/v1/accounts:lookup";

/// Who may read the full donation request listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingAccess {
    /// Only admins.
    #[default]
    Admin,
    /// Anyone, including anonymous callers.
    Public,
}

impl FromStr for ListingAccess {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(ListingAccess::Admin),
            "public" => Ok(ListingAccess::Public),
            _ => Err("expected 'admin' or 'public'".to_string()),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub log_level: Level,

    pub identity_api_key: String,
    pub identity_lookup_url: Url,

    pub stripe_secret_key: String,
    pub payment_currency: String,
    pub payment_minimum_amount: i64,

    pub request_listing_access: ListingAccess,
    /// Single origin allowed by CORS; any origin when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let payment_minimum_amount: i64 = parsed("PAYMENT_MINIMUM_AMOUNT", "1")?;
        if payment_minimum_amount < 1 {
            return Err(ConfigError::InvalidEnvVar {
                name: "PAYMENT_MINIMUM_AMOUNT".to_string(),
                value: payment_minimum_amount.to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: optional("DATABASE_URL", DEFAULT_DATABASE_URL),
            host: optional("HOST", "0.0.0.0"),
            port: parsed("PORT", "3000")?,
            log_level: parsed("LOG_LEVEL", "info")?,
            identity_api_key: required("IDENTITY_API_KEY")?,
            identity_lookup_url: parsed("IDENTITY_LOOKUP_URL", DEFAULT_IDENTITY_LOOKUP_URL)?,
            stripe_secret_key: required("STRIPE_SECRET_KEY")?,
            payment_currency: optional("PAYMENT_CURRENCY", "usd").to_ascii_lowercase(),
            payment_minimum_amount,
            request_listing_access: parsed("REQUEST_LISTING_ACCESS", "admin")?,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_value(name, optional(name, default))
}

fn parse_value<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: err.to_string(),
            value,
        })
}
