//! Database result model and execution path for the shared SQLite store.

mod sqlite;
mod types;

pub use sqlite::{execute_sql, is_row_returning};
pub use types::{QueryResult, Row, Value};
