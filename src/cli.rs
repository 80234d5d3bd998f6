//! Command-line interface for Playpen.
//!
//! A thin adapter over the core: subcommands map one-to-one onto the
//! engine's operations (playground CRUD, guarded execution, history).

use clap::{Parser, Subcommand};
use db_playpen::db::QueryResult;
use db_playpen::persistence::{HistoryRecord, Playground};
use std::path::PathBuf;

/// A SQL playground engine over a shared SQLite store.
#[derive(Parser, Debug)]
#[command(name = "playpen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the playground database file
    #[arg(long, value_name = "PATH", env = "PLAYPEN_DB", global = true)]
    pub db_path: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List playgrounds, most recently modified first
    List,

    /// Create a new playground
    Create {
        /// Title for the playground
        title: String,
    },

    /// Rename a playground
    Rename {
        /// Playground id
        id: i64,
        /// New title
        title: String,
    },

    /// Delete a playground and, by cascade, its history
    Delete {
        /// Playground id
        id: i64,
    },

    /// Execute SQL in a playground (gated, recorded in history)
    Run {
        /// Playground id
        id: i64,
        /// SQL text to execute
        sql: String,
    },

    /// Show a playground's execution history (newest first, capped at 50)
    History {
        /// Playground id
        id: i64,
    },
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Renders a playground listing as plain text.
pub fn render_playgrounds(playgrounds: &[Playground]) -> String {
    if playgrounds.is_empty() {
        return "No playgrounds yet. Create one with `playpen create <title>`.".to_string();
    }

    let mut out = String::new();
    for pg in playgrounds {
        out.push_str(&format!(
            "{:>4}  {}  (modified {})\n",
            pg.id, pg.title, pg.last_modified
        ));
    }
    out
}

/// Renders a query result as plain text.
pub fn render_result(result: &QueryResult) -> String {
    if result.columns.is_empty() {
        return "OK (0 rows)".to_string();
    }

    let mut out = String::new();
    out.push_str(&result.columns.join("\t"));
    out.push('\n');
    for row in &result.rows {
        let cells: Vec<String> = row.iter().map(|v| v.to_display_string()).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out.push_str(&format!(
        "({} row{})",
        result.row_count,
        if result.row_count == 1 { "" } else { "s" }
    ));
    out
}

/// Renders history records as plain text, one attempt per line.
pub fn render_history(records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return "No history.".to_string();
    }

    let mut out = String::new();
    for rec in records {
        let status = if rec.success { "ok " } else { "ERR" };
        out.push_str(&format!("[{}] {} {}", rec.executed_at, status, rec.query));
        if let Some(ref err) = rec.error {
            out.push_str(&format!("  -- {err}"));
        }
        out.push('\n');
    }
    out
}
