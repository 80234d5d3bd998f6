//! Playground workspace persistence.
//!
//! CRUD operations for playground metadata. Deleting a playground cascades
//! to its history rows at the storage layer.

use crate::error::{PlaypenError, Result};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqlitePool;
use sqlx::FromRow;

/// A named workspace isolating one SQL session and its history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Playground {
    pub id: i64,
    pub title: String,
    pub created_at: String,
    pub last_modified: String,
}

/// Rejects empty or whitespace-only titles.
fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(PlaypenError::validation(
            "Title is required and must be non-empty",
        ));
    }
    Ok(())
}

/// Lists all playgrounds, most recently touched first.
///
/// `datetime('now')` has one-second resolution, so id breaks ties for a
/// stable order under fast successive writes.
pub async fn list_playgrounds(pool: &SqlitePool) -> Result<Vec<Playground>> {
    let rows: Vec<Playground> = sqlx::query_as(
        r#"
        SELECT id, title, created_at, last_modified
        FROM playgrounds
        ORDER BY last_modified DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| PlaypenError::storage(format!("Failed to list playgrounds: {e}")))?;

    Ok(rows)
}

/// Creates a new playground and returns the stored row.
///
/// `created_at` and `last_modified` are both set to now by the store.
pub async fn create_playground(pool: &SqlitePool, title: &str) -> Result<Playground> {
    validate_title(title)?;

    let result = sqlx::query("INSERT INTO playgrounds (title) VALUES (?)")
        .bind(title)
        .execute(pool)
        .await
        .map_err(|e| PlaypenError::storage(format!("Failed to create playground: {e}")))?;

    let id = result.last_insert_rowid();

    get_playground(pool, id)
        .await?
        .ok_or_else(|| PlaypenError::storage("Created playground disappeared"))
}

/// Gets a playground by id. Returns `None` for a missing id, never an error.
pub async fn get_playground(pool: &SqlitePool, id: i64) -> Result<Option<Playground>> {
    let row: Option<Playground> = sqlx::query_as(
        r#"
        SELECT id, title, created_at, last_modified
        FROM playgrounds
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| PlaypenError::storage(format!("Failed to get playground: {e}")))?;

    Ok(row)
}

/// Renames a playground and advances its `last_modified` timestamp.
/// `created_at` is never touched.
pub async fn rename_playground(pool: &SqlitePool, id: i64, title: &str) -> Result<Playground> {
    validate_title(title)?;

    if get_playground(pool, id).await?.is_none() {
        return Err(PlaypenError::not_found(format!("Playground {id} not found")));
    }

    sqlx::query(
        r#"
        UPDATE playgrounds
        SET title = ?, last_modified = datetime('now')
        WHERE id = ?
        "#,
    )
    .bind(title)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| PlaypenError::storage(format!("Failed to rename playground: {e}")))?;

    get_playground(pool, id)
        .await?
        .ok_or_else(|| PlaypenError::storage("Renamed playground disappeared"))
}

/// Deletes a playground; its history rows go with it by cascade.
pub async fn delete_playground(pool: &SqlitePool, id: i64) -> Result<()> {
    if get_playground(pool, id).await?.is_none() {
        return Err(PlaypenError::not_found(format!("Playground {id} not found")));
    }

    sqlx::query("DELETE FROM playgrounds WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| PlaypenError::storage(format!("Failed to delete playground: {e}")))?;

    Ok(())
}
