//! Integration tests for playground CRUD.

use super::create_test_db;
use db_playpen::error::PlaypenError;
use db_playpen::persistence::playgrounds;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_playground_crud_round_trip() {
    let (db, _dir) = create_test_db().await;

    let created = playgrounds::create_playground(db.pool(), "demo")
        .await
        .unwrap();
    assert_eq!(created.title, "demo");
    assert_eq!(created.created_at, created.last_modified);

    let fetched = playgrounds::get_playground(db.pool(), created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.title, "demo");
    assert_eq!(fetched.created_at, created.created_at);

    let renamed = playgrounds::rename_playground(db.pool(), created.id, "renamed")
        .await
        .unwrap();
    assert_eq!(renamed.title, "renamed");
    assert_eq!(renamed.created_at, created.created_at);
    assert!(renamed.last_modified >= created.last_modified);

    playgrounds::delete_playground(db.pool(), created.id)
        .await
        .unwrap();
    let gone = playgrounds::get_playground(db.pool(), created.id)
        .await
        .unwrap();
    assert!(gone.is_none());

    db.close().await;
}

#[tokio::test]
async fn test_list_reflects_modification_order() {
    let (db, _dir) = create_test_db().await;

    let a = playgrounds::create_playground(db.pool(), "a").await.unwrap();
    let b = playgrounds::create_playground(db.pool(), "b").await.unwrap();

    let listed = playgrounds::list_playgrounds(db.pool()).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, b.id);

    // Renaming touches last_modified, moving the playground to the front.
    playgrounds::rename_playground(db.pool(), a.id, "a2")
        .await
        .unwrap();
    let listed = playgrounds::list_playgrounds(db.pool()).await.unwrap();
    assert_eq!(listed[0].id, a.id);
    assert_eq!(listed[0].title, "a2");

    db.close().await;
}

#[tokio::test]
async fn test_validation_and_not_found_errors() {
    let (db, _dir) = create_test_db().await;

    assert!(matches!(
        playgrounds::create_playground(db.pool(), "  ")
            .await
            .unwrap_err(),
        PlaypenError::Validation(_)
    ));
    assert!(matches!(
        playgrounds::rename_playground(db.pool(), 12345, "x")
            .await
            .unwrap_err(),
        PlaypenError::NotFound(_)
    ));
    assert!(matches!(
        playgrounds::delete_playground(db.pool(), 12345)
            .await
            .unwrap_err(),
        PlaypenError::NotFound(_)
    ));

    // Missing ids are a None, never an error.
    let missing = playgrounds::get_playground(db.pool(), 12345).await.unwrap();
    assert!(missing.is_none());

    db.close().await;
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let (db, _dir) = create_test_db().await;

    let first = playgrounds::create_playground(db.pool(), "one").await.unwrap();
    playgrounds::delete_playground(db.pool(), first.id)
        .await
        .unwrap();

    let second = playgrounds::create_playground(db.pool(), "two").await.unwrap();
    assert!(second.id > first.id);

    db.close().await;
}
