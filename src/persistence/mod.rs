//! Persistence layer for Playpen.
//!
//! Owns the single shared SQLite store that holds playground metadata,
//! execution history, and whatever tables user SQL creates. The connection
//! is an explicitly owned resource: constructed once at startup, schema
//! ensured on open, and handed to components by reference.

pub mod history;
mod migrations;
pub mod playgrounds;

pub use history::HistoryRecord;
pub use playgrounds::Playground;

use crate::error::{PlaypenError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Main persistence interface for the playground database.
pub struct PlaygroundDb {
    pool: SqlitePool,
    db_path: PathBuf,
}

impl PlaygroundDb {
    /// Opens or creates the playground database at the default platform path.
    ///
    /// - Linux/macOS: `~/.config/playpen/playground.db`
    /// - Windows: `%APPDATA%\playpen\playground.db`
    pub async fn open_default() -> Result<Self> {
        let path = Self::default_path()?;
        Self::open(&path).await
    }

    /// Opens or creates the playground database at the specified path.
    ///
    /// Schema is ensured exactly once per open; every handle implies an
    /// initialized store.
    pub async fn open(path: &PathBuf) -> Result<Self> {
        Self::ensure_parent_dirs(path)?;

        let pool = Self::connect(path).await?;
        migrations::run_migrations(&pool).await?;
        info!("Playground database opened at {}", path.display());

        Ok(Self {
            pool,
            db_path: path.clone(),
        })
    }

    /// Returns the default database path for the current platform.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlaypenError::storage("Could not determine config directory"))?;
        Ok(config_dir.join("playpen").join("playground.db"))
    }

    /// Creates a connection pool to the SQLite database.
    ///
    /// A single connection serializes all writers; the core adds no locking
    /// of its own on top of the engine's discipline.
    async fn connect(path: &PathBuf) -> Result<SqlitePool> {
        let conn_str = format!("sqlite:{}?mode=rwc", path.display());
        let options = SqliteConnectOptions::from_str(&conn_str)
            .map_err(|e| PlaypenError::storage(format!("Invalid database path: {e}")))?
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true)
            .create_if_missing(true);

        SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await
            .map_err(|e| {
                PlaypenError::storage(format!("Failed to connect to playground database: {e}"))
            })
    }

    /// Ensures parent directories exist for the database path.
    fn ensure_parent_dirs(path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlaypenError::storage(format!(
                    "Failed to create data directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        Ok(())
    }

    /// Returns the path to the playground database.
    pub fn path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
