//! SQL execution against the shared SQLite store.
//!
//! Runs free-form statements and normalizes heterogeneous result shapes
//! (DDL/DML vs. row-returning queries) into one uniform [`QueryResult`].

use crate::db::{QueryResult, Row, Value};
use crate::error::{PlaypenError, Result};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::{Column as SqlxColumn, Row as SqlxRow, TypeInfo};
use std::time::Instant;
use tracing::debug;

/// Executes a SQL statement and normalizes the outcome.
///
/// Row-returning statements are collected eagerly; everything else runs
/// through the side-effecting path and yields the empty shape. Store
/// failures map to [`PlaypenError::Query`] carrying the engine's message.
pub async fn execute_sql(pool: &SqlitePool, sql: &str) -> Result<QueryResult> {
    let start = Instant::now();

    let result = if is_row_returning(sql) {
        let rows = sqlx::query(sql)
            .fetch_all(pool)
            .await
            .map_err(|e| PlaypenError::query(query_error_message(e)))?;
        normalize_rows(&rows)
    } else {
        sqlx::query(sql)
            .execute(pool)
            .await
            .map_err(|e| PlaypenError::query(query_error_message(e)))?;
        QueryResult::new()
    };

    debug!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        row_count = result.row_count,
        "executed statement"
    );

    Ok(result)
}

/// Heuristic row-returning detection: the trimmed statement lexically
/// begins with `SELECT`, case-insensitively.
///
/// Known limitation: statements that return rows through other forms
/// (e.g. `INSERT ... RETURNING`) are not recognized and yield the empty
/// result shape.
pub fn is_row_returning(sql: &str) -> bool {
    sql.trim_start()
        .get(..6)
        .is_some_and(|head| head.eq_ignore_ascii_case("SELECT"))
}

/// Builds a uniform result from fetched rows.
///
/// Column names come from the first row's metadata in store order; every
/// row maps into a positional sequence of that width, with SQL NULL as an
/// explicit [`Value::Null`].
fn normalize_rows(rows: &[SqliteRow]) -> QueryResult {
    let Some(first) = rows.first() else {
        return QueryResult::new();
    };

    let columns: Vec<String> = first
        .columns()
        .iter()
        .map(|col| col.name().to_string())
        .collect();

    let data: Vec<Row> = rows.iter().map(convert_row).collect();

    QueryResult::with_data(columns, data)
}

/// Converts a sqlx SqliteRow to our Row type.
fn convert_row(row: &SqliteRow) -> Row {
    row.columns()
        .iter()
        .enumerate()
        .map(|(i, col)| convert_value(row, i, col.type_info().name()))
        .collect()
}

/// Converts a single column value from a SqliteRow to our Value type.
fn convert_value(row: &SqliteRow, index: usize, type_name: &str) -> Value {
    match type_name.to_uppercase().as_str() {
        "BOOLEAN" | "BOOL" => row
            .try_get::<Option<bool>, _>(index)
            .ok()
            .flatten()
            .map(Value::Bool)
            .unwrap_or(Value::Null),

        "INTEGER" | "INT" | "INT4" | "INT8" | "BIGINT" => row
            .try_get::<Option<i64>, _>(index)
            .ok()
            .flatten()
            .map(Value::Int)
            .unwrap_or(Value::Null),

        "REAL" | "FLOAT" | "DOUBLE" | "NUMERIC" => row
            .try_get::<Option<f64>, _>(index)
            .ok()
            .flatten()
            .map(Value::Float)
            .unwrap_or(Value::Null),

        "BLOB" => row
            .try_get::<Option<Vec<u8>>, _>(index)
            .ok()
            .flatten()
            .map(Value::Blob)
            .unwrap_or(Value::Null),

        // TEXT, DATETIME, and anything else: fall back to string
        _ => row
            .try_get::<Option<String>, _>(index)
            .ok()
            .flatten()
            .map(Value::Text)
            .unwrap_or(Value::Null),
    }
}

/// Strips sqlx wrapping so callers see the engine's message, not
/// driver-level detail.
fn query_error_message(e: sqlx::Error) -> String {
    match e {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}
