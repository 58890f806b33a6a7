//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use tabla_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`PublicUser`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PublicUser {
    pub id: DbId,
    pub username: String,
}

/// DTO for creating a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    /// Argon2id PHC string, hashed by the caller. Plaintext never reaches
    /// this layer.
    pub password_hash: String,
}
