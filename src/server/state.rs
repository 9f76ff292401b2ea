//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Identity provider used by the authentication guard
//! - Payment provider used for contribution intents
//! - Access policy for the full donation request listing

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::ListingAccess,
    service::{identity::IdentityProvider, payment::PaymentProvider},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database connection is a pool handle and the
/// collaborators sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Verifies bearer credentials.
    pub identity: Arc<dyn IdentityProvider>,

    /// Creates payment intents for contributions.
    pub payments: Arc<dyn PaymentProvider>,

    /// Who may read `GET /donation-requests`.
    pub request_listing_access: ListingAccess,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `identity` - Identity provider for bearer credential verification
    /// - `payments` - Payment provider for contribution intents
    /// - `request_listing_access` - Access policy for the full request listing
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        identity: Arc<dyn IdentityProvider>,
        payments: Arc<dyn PaymentProvider>,
        request_listing_access: ListingAccess,
    ) -> Self {
        Self {
            db,
            identity,
            payments,
            request_listing_access,
        }
    }
}
