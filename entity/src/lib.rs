//! SeaORM entity definitions for the blood donation database.
//!
//! Each module maps one table. Enumerated columns (`role`, `status`) are stored as
//! lowercase strings and parsed into domain enums by the server's repositories.

pub mod prelude;

pub mod donation_request;
pub mod funding;
pub mod user;
