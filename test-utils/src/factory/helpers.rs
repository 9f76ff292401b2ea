//! Shared helper utilities for factory methods.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{donation_request::DonationRequestFactory, user::UserFactory};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique emails and names
/// across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Returns a timestamp `minutes` minutes in the past.
///
/// Used to give entities distinct, ordered `created_at` values so newest-first
/// ordering can be asserted deterministically.
pub fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    Utc::now() - Duration::minutes(minutes)
}

/// Creates a requester and a donor user plus a pending request owned by the requester.
///
/// # Returns
/// - `Ok((requester, donor, request))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_request_with_participants(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::donation_request::Model,
    ),
    DbErr,
> {
    let requester = UserFactory::new(db).build().await?;
    let donor = UserFactory::new(db).build().await?;
    let request = DonationRequestFactory::new(db, &requester.email)
        .requester_name(requester.name.clone())
        .build()
        .await?;

    Ok((requester, donor, request))
}
