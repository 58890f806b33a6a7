//! Handlers for the `/notes` resource.
//!
//! Authorization policy: List is open to anonymous callers (they see only
//! public notes); Create, Update, and Delete require a resolved identity and
//! act only on rows the caller owns. The owner check lives inside the
//! repository's SQL, so a mismatch surfaces here as "no row matched".

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tabla_core::error::CoreError;
use tabla_core::types::DbId;
use tabla_db::models::note::{CreateNote, Note, UpdateNote};
use tabla_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /notes` and `PUT /notes/{id}`.
///
/// `title` and `content` are mandatory; optional here so a missing key is a
/// 400 validation error rather than a framework-level rejection. `taal` and
/// `structure` are genuinely optional metadata.
#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub taal: Option<String>,
    pub structure: Option<String>,
}

/// Response body for `DELETE /notes/{id}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /notes
///
/// List every note visible to the caller, newest-first: own notes plus
/// public notes when authenticated, public notes only when anonymous.
pub async fn list(
    State(state): State<AppState>,
    MaybeAuthUser(identity): MaybeAuthUser,
) -> AppResult<Json<Vec<Note>>> {
    let notes = NoteRepo::list_visible(&state.pool, identity).await?;
    Ok(Json(notes))
}

/// POST /notes
///
/// Create a note owned by the caller. Returns the persisted row, including
/// the storage-assigned id and timestamp.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<NoteRequest>,
) -> AppResult<(StatusCode, Json<Note>)> {
    let (title, content, taal, structure) = validate_note_fields(input)?;

    let create = CreateNote {
        title,
        content,
        taal,
        structure,
    };
    let note = NoteRepo::create(&state.pool, user.user_id, &create).await?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /notes/{id}
///
/// Full-row update of a note the caller owns. A note that does not exist and
/// a note owned by someone else are both reported as 404.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<NoteRequest>,
) -> AppResult<Json<Note>> {
    let (title, content, taal, structure) = validate_note_fields(input)?;

    let update = UpdateNote {
        title,
        content,
        taal,
        structure,
    };
    let note = NoteRepo::update_owned(&state.pool, id, user.user_id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    Ok(Json(note))
}

/// DELETE /notes/{id}
///
/// Delete a note the caller owns. Always reports success: a nonexistent id
/// or a note owned by someone else is a silent no-op, so the response leaks
/// nothing about other users' notes.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = NoteRepo::delete_owned(&state.pool, id, user.user_id).await?;
    if !deleted {
        tracing::debug!(note_id = id, user_id = user.user_id, "Delete matched no row");
    }

    Ok(Json(MessageResponse {
        message: "Note deleted successfully",
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate that `title` and `content` are present and non-empty.
#[allow(clippy::type_complexity)]
fn validate_note_fields(
    input: NoteRequest,
) -> Result<(String, String, Option<String>, Option<String>), AppError> {
    match (input.title, input.content) {
        (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
            Ok((title, content, input.taal, input.structure))
        }
        _ => Err(AppError::Core(CoreError::Validation(
            "Title and content are required".into(),
        ))),
    }
}
