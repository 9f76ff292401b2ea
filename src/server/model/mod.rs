//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Enumerations stored as strings are parsed here so that services only ever see typed
//! values.

pub mod donation_request;
pub mod funding;
pub mod identity;
pub mod pagination;
pub mod stats;
pub mod user;

use thiserror::Error;

/// Error returned when a string does not name any variant of a domain enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown variant '{0}'")]
pub struct UnknownVariant(pub String);
