//! Credential service primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- signed, time-limited identity token generation and verification.

pub mod jwt;
pub mod password;
