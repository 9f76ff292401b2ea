use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, internal::InternalError, AppError},
    service::{
        identity::{FirebaseIdentityProvider, IdentityProvider},
        payment::{PaymentProvider, StripePaymentProvider},
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Installs the global tracing subscriber at the configured level.
pub fn init_logger(config: &Config) -> Result<(), AppError> {
    dioxus_logger::init(config.log_level)
        .map_err(|e| InternalError::Logger(e.to_string()))?;

    Ok(())
}

/// Builds the HTTP client shared by the identity and payment providers.
///
/// Redirects are disabled so a provider response can never send credentials to
/// another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

pub fn setup_identity_provider(
    config: &Config,
    http_client: reqwest::Client,
) -> Arc<dyn IdentityProvider> {
    Arc::new(FirebaseIdentityProvider::new(
        http_client,
        config.identity_lookup_url.clone(),
        config.identity_api_key.clone(),
    ))
}

pub fn setup_payment_provider(
    config: &Config,
    http_client: reqwest::Client,
) -> Arc<dyn PaymentProvider> {
    Arc::new(StripePaymentProvider::new(
        http_client,
        config.stripe_secret_key.clone(),
        config.payment_currency.clone(),
        config.payment_minimum_amount,
    ))
}

/// Builds the CORS layer, restricted to `CORS_ALLOWED_ORIGIN` when it is set.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let cors = match &config.cors_allowed_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                name: "CORS_ALLOWED_ORIGIN".to_string(),
                value: origin.clone(),
                reason: e.to_string(),
            })?;
            cors.allow_origin(origin)
        }
        None => cors.allow_origin(Any),
    };

    Ok(cors)
}
