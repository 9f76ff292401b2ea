//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! record collection. Repositories build queries and conditional updates with SeaORM and
//! return entity models; conversion to domain models happens in the service layer where
//! stored enumeration values are validated.

pub mod donation_request;
pub mod funding;
pub mod user;
