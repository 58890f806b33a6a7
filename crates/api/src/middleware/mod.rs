//! Request-level authorization.

pub mod auth;
