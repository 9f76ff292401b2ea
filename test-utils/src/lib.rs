//! Blood Donation Server Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the blood
//! donation server. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for seeding users, donation requests and fundings.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_request_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_all_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let request = factory::create_donation_request(db, &user.email).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
