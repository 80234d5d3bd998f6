//! End-to-end tests for guarded query execution.

use super::create_test_db;
use db_playpen::db::Value;
use db_playpen::error::PlaypenError;
use db_playpen::persistence::{history, playgrounds};
use db_playpen::query::QueryExecutor;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_select_scenario() {
    let (db, _dir) = create_test_db().await;
    let pg = playgrounds::create_playground(db.pool(), "demo")
        .await
        .unwrap();
    let executor = QueryExecutor::new(&db);

    let result = executor.run_guarded(pg.id, "SELECT 1 as x").await.unwrap();
    assert_eq!(result.columns, vec!["x"]);
    assert_eq!(result.rows, vec![vec![Value::Int(1)]]);
    assert_eq!(result.row_count, 1);

    let records = history::get_history(db.pool(), pg.id).await.unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].success);

    db.close().await;
}

#[tokio::test]
async fn test_user_tables_persist_across_playgrounds() {
    // The store is shared: tables created in one playground are visible
    // from another. Isolation is per-history, not per-data.
    let (db, _dir) = create_test_db().await;
    let a = playgrounds::create_playground(db.pool(), "a").await.unwrap();
    let b = playgrounds::create_playground(db.pool(), "b").await.unwrap();
    let executor = QueryExecutor::new(&db);

    executor
        .run_guarded(a.id, "CREATE TABLE shared_t(v INT)")
        .await
        .unwrap();
    executor
        .run_guarded(a.id, "INSERT INTO shared_t VALUES (7)")
        .await
        .unwrap();

    let from_b = executor
        .run_guarded(b.id, "SELECT v FROM shared_t")
        .await
        .unwrap();
    assert_eq!(from_b.rows, vec![vec![Value::Int(7)]]);

    // History stays scoped to each playground.
    assert_eq!(history::get_history(db.pool(), a.id).await.unwrap().len(), 2);
    assert_eq!(history::get_history(db.pool(), b.id).await.unwrap().len(), 1);

    db.close().await;
}

#[tokio::test]
async fn test_every_denied_keyword_is_rejected_and_recorded() {
    let (db, _dir) = create_test_db().await;
    let pg = playgrounds::create_playground(db.pool(), "guarded")
        .await
        .unwrap();
    let executor = QueryExecutor::new(&db);

    let attempts = [
        "DROP TABLE foo",
        "delete from foo",
        "TRUNCATE TABLE foo",
        "ALTER TABLE foo ADD c INT",
        "PRAGMA foreign_keys = OFF",
        "ATTACH DATABASE 'x' AS x",
        "DETACH DATABASE x",
    ];

    for sql in attempts {
        let err = executor.run_guarded(pg.id, sql).await.unwrap_err();
        assert!(
            matches!(err, PlaypenError::RejectedQuery(_)),
            "expected rejection for {sql}"
        );
    }

    let records = history::get_history(db.pool(), pg.id).await.unwrap();
    assert_eq!(records.len(), attempts.len());
    for rec in &records {
        assert!(!rec.success);
        assert!(rec.error.is_some());
    }
    // Verbatim query text, newest first.
    assert_eq!(records[0].query, "DETACH DATABASE x");
    assert_eq!(records[records.len() - 1].query, "DROP TABLE foo");

    db.close().await;
}

#[tokio::test]
async fn test_failed_sql_still_lands_in_history() {
    let (db, _dir) = create_test_db().await;
    let pg = playgrounds::create_playground(db.pool(), "typos")
        .await
        .unwrap();
    let executor = QueryExecutor::new(&db);

    let err = executor
        .run_guarded(pg.id, "SELEC 1")
        .await
        .unwrap_err();
    assert!(matches!(err, PlaypenError::Query(_)));

    let records = history::get_history(db.pool(), pg.id).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].query, "SELEC 1");
    assert!(!records[0].success);
    assert!(records[0].error.is_some());

    db.close().await;
}

#[tokio::test]
async fn test_empty_select_returns_empty_shape() {
    let (db, _dir) = create_test_db().await;
    let pg = playgrounds::create_playground(db.pool(), "empty")
        .await
        .unwrap();
    let executor = QueryExecutor::new(&db);

    executor
        .run_guarded(pg.id, "CREATE TABLE nothing_here(a INT)")
        .await
        .unwrap();
    let result = executor
        .run_guarded(pg.id, "SELECT * FROM nothing_here")
        .await
        .unwrap();

    assert!(result.columns.is_empty());
    assert!(result.rows.is_empty());
    assert_eq!(result.row_count, 0);

    db.close().await;
}

#[tokio::test]
async fn test_result_shape_is_uniform() {
    let (db, _dir) = create_test_db().await;
    let pg = playgrounds::create_playground(db.pool(), "shapes")
        .await
        .unwrap();
    let executor = QueryExecutor::new(&db);

    executor
        .run_guarded(pg.id, "CREATE TABLE t(a INT, b TEXT, c REAL)")
        .await
        .unwrap();
    executor
        .run_guarded(
            pg.id,
            "INSERT INTO t VALUES (1, 'x', 1.5), (NULL, NULL, NULL), (3, 'z', 2.5)",
        )
        .await
        .unwrap();

    let result = executor
        .run_guarded(pg.id, "SELECT a, b, c FROM t ORDER BY rowid")
        .await
        .unwrap();

    assert_eq!(result.row_count, 3);
    assert_eq!(result.row_count, result.rows.len());
    for row in &result.rows {
        assert_eq!(row.len(), result.columns.len());
    }
    assert_eq!(
        result.rows[1],
        vec![Value::Null, Value::Null, Value::Null]
    );

    db.close().await;
}
