mod model;
mod server;

use dioxus_logger::tracing;
use tower_http::trace::TraceLayer;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logger(&config)?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let identity = startup::setup_identity_provider(&config, http_client.clone());
    let payments = startup::setup_payment_provider(&config, http_client);
    let cors = startup::setup_cors(&config)?;

    let app = router::router()
        .with_state(AppState::new(
            db,
            identity,
            payments,
            config.request_listing_access,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
