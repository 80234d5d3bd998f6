//! Integration tests for Playpen.

pub mod executor_test;
pub mod playgrounds_test;

use db_playpen::persistence::PlaygroundDb;

/// Opens a fresh playground database in a temp directory.
pub async fn create_test_db() -> (PlaygroundDb, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_playground.db");
    let db = PlaygroundDb::open(&path).await.unwrap();
    (db, dir)
}
