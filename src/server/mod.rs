//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the blood donation service: API
//! endpoints, business logic, data access and the adapters for the external identity
//! and payment providers. The backend uses Axum as the web framework and SeaORM over
//! SQLite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations returning SeaORM entity models
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer credential verification and permission guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, identity and payment providers)
//! - **Startup** (`startup`) - Initialization of database, logger, HTTP client and providers
//! - **Router** (`router`) - Route table and OpenAPI documentation
//! - **Utilities** (`util`) - Input parsing and normalization helpers
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** authorizes the caller through `AuthGuard`, converts DTOs to params
//! 3. **Service** executes business logic and calls the repositories
//! 4. **Data** queries the database and returns entity models
//! 5. **Service** converts entities to domain models
//! 6. **Controller** converts domain model to DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
