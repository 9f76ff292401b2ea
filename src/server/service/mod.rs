//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing the donation request lifecycle and input rules
//! - **Orchestration**: Coordinating repository calls and external collaborators
//! - **Domain Models**: Converting entity models and working with domain types
//!
//! External collaborators (identity and payment providers) are traits so that the
//! production HTTP clients can be swapped for in-memory doubles in tests.

pub mod admin;
pub mod donation_request;
pub mod funding;
pub mod identity;
pub mod payment;
pub mod user;
