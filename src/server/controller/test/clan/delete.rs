use super::*;

/// Tests deleting an existing clan.
///
/// Expected: 200 with the id and success message, row removed
#[tokio::test]
async fn deletes_clan() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clan = factory::create_clan(db).await.unwrap();
    let other = factory::create_clan(db).await.unwrap();

    let (status, body) = send(app(db), delete(&format!("/clans/{}", clan.id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(clan.id.to_string()));
    assert_eq!(body["message"], "Clan deleted successfully.");

    let remaining = entity::prelude::Clan::find().all(db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other.id);
}

/// Tests deleting an unknown id.
///
/// Expected: 404 with {"detail": "Clan not found"}, count unchanged
#[tokio::test]
async fn returns_not_found_for_unknown_id() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_clan(db).await.unwrap();

    let (status, body) = send(app(db), delete(&format!("/clans/{}", Uuid::new_v4()))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Clan not found" }));
    assert_eq!(entity::prelude::Clan::find().count(db).await.unwrap(), 1);
}

/// Tests deleting with a path id that is not a UUID.
///
/// Expected: 404
#[tokio::test]
async fn returns_not_found_for_malformed_id() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), delete("/clans/not-a-uuid")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Clan not found");
}

/// Tests deleting the same clan twice.
///
/// Expected: 200 then 404
#[tokio::test]
async fn second_delete_is_not_found() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clan = factory::create_clan(db).await.unwrap();
    let uri = format!("/clans/{}", clan.id);

    let (first, _) = send(app(db), delete(&uri)).await;
    let (second, _) = send(app(db), delete(&uri)).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::NOT_FOUND);
}
