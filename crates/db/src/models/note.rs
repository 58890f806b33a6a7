//! Note entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use tabla_core::types::{DbId, Timestamp};

/// Full note row from the `notes` table.
///
/// Serializes directly as the wire shape:
/// `{id, title, content, taal, structure, date_modified, user_id}`.
/// `user_id` is `null` for public (un-owned) notes.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub taal: Option<String>,
    pub structure: Option<String>,
    pub date_modified: Timestamp,
    pub user_id: Option<DbId>,
}

/// DTO for creating a new note. The owner comes from the resolved identity,
/// not from the request body.
#[derive(Debug)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
    pub taal: Option<String>,
    pub structure: Option<String>,
}

/// DTO for a full-row note update. There is no partial update: every field
/// is written, and `date_modified` is re-stamped by the store.
#[derive(Debug)]
pub struct UpdateNote {
    pub title: String,
    pub content: String,
    pub taal: Option<String>,
    pub structure: Option<String>,
}
