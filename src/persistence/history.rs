//! Execution history persistence.
//!
//! Append-only audit of every execution attempt against a playground,
//! including attempts the safety gate denied before reaching the store.
//! Rows are never updated; they disappear only by cascade when the owning
//! playground is deleted.

use crate::error::{PlaypenError, Result};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqlitePool;
use sqlx::FromRow;

/// Retrieval cap: only the most recent entries are exposed. Older rows
/// remain stored but are not reachable through `get_history`.
const HISTORY_LIMIT: i64 = 50;

/// An immutable audit entry for one execution attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub playground_id: i64,
    /// The raw SQL text as submitted, stored verbatim even when rejected.
    pub query: String,
    pub executed_at: String,
    pub success: bool,
    /// Present only when `success` is false.
    pub error: Option<String>,
}

/// Raw database row for a history record.
#[derive(Debug, Clone, FromRow)]
struct HistoryRecordRow {
    id: i64,
    playground_id: i64,
    query: String,
    executed_at: String,
    success: i64,
    error: Option<String>,
}

impl From<HistoryRecordRow> for HistoryRecord {
    fn from(row: HistoryRecordRow) -> Self {
        Self {
            id: row.id,
            playground_id: row.playground_id,
            query: row.query,
            executed_at: row.executed_at,
            success: row.success != 0,
            error: row.error,
        }
    }
}

/// Appends one execution attempt to the history.
pub async fn record_attempt(
    pool: &SqlitePool,
    playground_id: i64,
    query: &str,
    success: bool,
    error: Option<&str>,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO query_history (playground_id, query, success, error)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(playground_id)
    .bind(query)
    .bind(success as i64)
    .bind(error)
    .execute(pool)
    .await
    .map_err(|e| PlaypenError::storage(format!("Failed to record history: {e}")))?;

    Ok(result.last_insert_rowid())
}

/// Returns a playground's history, newest first, capped at the 50 most
/// recent entries. An unknown playground yields an empty list.
pub async fn get_history(pool: &SqlitePool, playground_id: i64) -> Result<Vec<HistoryRecord>> {
    let rows: Vec<HistoryRecordRow> = sqlx::query_as(
        r#"
        SELECT id, playground_id, query, executed_at, success, error
        FROM query_history
        WHERE playground_id = ?
        ORDER BY executed_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(playground_id)
    .bind(HISTORY_LIMIT)
    .fetch_all(pool)
    .await
    .map_err(|e| PlaypenError::storage(format!("Failed to get history: {e}")))?;

    Ok(rows.into_iter().map(HistoryRecord::from).collect())
}
