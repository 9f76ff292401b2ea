//! HTTP request handlers.
//!
//! Each handler authorizes the caller through `AuthGuard`, converts the request payload
//! into a domain parameter, calls the matching service and converts the result back
//! into a DTO.

pub mod admin;
pub mod donation_request;
pub mod funding;
pub mod health;
pub mod user;
