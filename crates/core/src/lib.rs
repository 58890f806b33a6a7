//! Shared domain types and errors for the Tabla Notes backend.

pub mod error;
pub mod types;
