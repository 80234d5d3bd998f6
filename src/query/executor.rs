//! Guarded query execution.
//!
//! Composes the safety gate, the execution path, and the history recorder:
//! every attempt against a playground leaves exactly one history row,
//! whether it was denied, failed in the store, or succeeded.

use crate::db::{self, QueryResult};
use crate::error::{PlaypenError, Result};
use crate::persistence::{history, playgrounds, PlaygroundDb};
use crate::safety::{self, SafetyVerdict};
use sqlx::sqlite::SqlitePool;
use tracing::warn;

/// Runs user-submitted SQL against the shared store with gating and
/// history recording. The single entry point the request layer should call.
pub struct QueryExecutor<'a> {
    pool: &'a SqlitePool,
}

impl<'a> QueryExecutor<'a> {
    /// Creates a new query executor over the playground database.
    pub fn new(db: &'a PlaygroundDb) -> Self {
        Self { pool: db.pool() }
    }

    /// Creates an executor from a bare pool.
    ///
    /// This is primarily useful for testing.
    pub fn from_pool(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Executes `sql` on behalf of a playground.
    ///
    /// The playground must exist; the statement must pass the safety gate;
    /// execution errors surface as [`PlaypenError::Query`]. Every attempt
    /// past the existence check is appended to history before this returns.
    pub async fn run_guarded(&self, playground_id: i64, sql: &str) -> Result<QueryResult> {
        if playgrounds::get_playground(self.pool, playground_id)
            .await?
            .is_none()
        {
            return Err(PlaypenError::not_found(format!(
                "Playground {playground_id} not found"
            )));
        }

        let verdict = safety::classify(sql);
        if !verdict.permitted {
            let message = SafetyVerdict::denial_message();
            self.record(playground_id, sql, false, Some(message)).await;
            return Err(PlaypenError::rejected(message));
        }

        match db::execute_sql(self.pool, sql).await {
            Ok(result) => {
                self.record(playground_id, sql, true, None).await;
                Ok(result)
            }
            Err(e) => {
                // History stores the engine's message without the error
                // category prefix.
                let message = match &e {
                    PlaypenError::Query(msg) => msg.clone(),
                    other => other.to_string(),
                };
                self.record(playground_id, sql, false, Some(&message)).await;
                Err(e)
            }
        }
    }

    /// Appends a history row. A failed append is logged and swallowed so it
    /// never masks the primary result or error being returned.
    async fn record(&self, playground_id: i64, sql: &str, success: bool, error: Option<&str>) {
        if let Err(e) =
            history::record_attempt(self.pool, playground_id, sql, success, error).await
        {
            warn!("Failed to record history for playground {playground_id}: {e}");
        }
    }
}
