//! Request guards applied inside controllers.

pub mod auth;
