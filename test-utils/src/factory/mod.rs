//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let requester = factory::create_user(&db).await?;
//! let request = factory::create_donation_request(&db, &requester.email).await?;
//! let funding = factory::create_funding(&db, 250).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role("admin")
//!     .build()
//!     .await?;
//!
//! let done = factory::donation_request::DonationRequestFactory::new(&db, &admin.email)
//!     .status("done")
//!     .blood_group("O+")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `donation_request` - Create donation request entities
//! - `funding` - Create funding entities
//! - `helpers` - Shared counters and multi-entity helpers

pub mod donation_request;
pub mod funding;
pub mod helpers;
pub mod user;

pub use donation_request::create_donation_request;
pub use funding::create_funding;
pub use user::{create_admin, create_user};
