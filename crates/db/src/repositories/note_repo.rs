//! Repository for the `notes` table.
//!
//! Ownership is enforced inside the SQL itself: every mutation matches on
//! `id AND user_id` in a single statement, so the owner check and the write
//! cannot race. A note with a NULL `user_id` is public -- readable by every
//! caller and never matched by the owner-gated mutations.

use sqlx::PgPool;
use tabla_core::types::DbId;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, taal, structure, date_modified, user_id";

/// Provides persistence operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List every note visible to the given identity, newest-first.
    ///
    /// An authenticated caller sees their own notes plus all public notes;
    /// an anonymous caller sees only public notes. This is one union query,
    /// so the `date_modified` ordering is global across both subsets.
    pub async fn list_visible(
        pool: &PgPool,
        identity: Option<DbId>,
    ) -> Result<Vec<Note>, sqlx::Error> {
        match identity {
            Some(user_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM notes
                     WHERE user_id IS NULL OR user_id = $1
                     ORDER BY date_modified DESC"
                );
                sqlx::query_as::<_, Note>(&query)
                    .bind(user_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM notes
                     WHERE user_id IS NULL
                     ORDER BY date_modified DESC"
                );
                sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
            }
        }
    }

    /// Insert a new note owned by `owner`, returning the persisted row.
    ///
    /// `RETURNING` reflects the storage-assigned `id` and `date_modified`
    /// rather than echoing the input.
    pub async fn create(
        pool: &PgPool,
        owner: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, content, taal, structure, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.taal)
            .bind(&input.structure)
            .bind(owner)
            .fetch_one(pool)
            .await
    }

    /// Update a note, but only if it is owned by `owner`.
    ///
    /// Returns `None` when no row matched -- which collapses "does not
    /// exist" and "exists but belongs to someone else" into one outcome, so
    /// callers cannot probe for other users' note ids.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        owner: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = $3,
                content = $4,
                taal = $5,
                structure = $6,
                date_modified = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.taal)
            .bind(&input.structure)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note, but only if it is owned by `owner`.
    ///
    /// Returns `true` if a row was deleted. A mismatch (nonexistent id, or a
    /// note owned by someone else) deletes nothing and returns `false`.
    pub async fn delete_owned(pool: &PgPool, id: DbId, owner: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a note by id regardless of owner. Test and diagnostic helper.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
