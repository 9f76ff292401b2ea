//! Data transfer objects exchanged with API clients.
//!
//! These types define the JSON shapes of request and response bodies. Field names are
//! camelCase on the wire. Server-side domain models convert to and from these types at
//! the controller boundary.

pub mod api;
pub mod donation_request;
pub mod funding;
pub mod stats;
pub mod user;
