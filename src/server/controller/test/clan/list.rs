use super::*;

/// Tests listing clans newest first.
///
/// Expected: 200 with clans ordered by created_at descending
#[tokio::test]
async fn lists_newest_first() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::clan::ClanFactory::new(db)
        .created_at(minutes_after_default(1))
        .build()
        .await
        .unwrap();
    let newer = factory::clan::ClanFactory::new(db)
        .created_at(minutes_after_default(2))
        .build()
        .await
        .unwrap();

    let (status, body) = send(app(db), get("/clans")).await;

    assert_eq!(status, StatusCode::OK);
    let clans = body.as_array().unwrap();
    assert_eq!(clans.len(), 2);
    assert_eq!(clans[0]["id"], json!(newer.id.to_string()));
    assert_eq!(clans[1]["id"], json!(older.id.to_string()));
}

/// Tests the response shape of a listed clan.
///
/// Expected: exactly id, name, region and created_at
#[tokio::test]
async fn returns_clan_fields() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clan = factory::clan::ClanFactory::new(db)
        .name("Dragons")
        .region("TR")
        .build()
        .await
        .unwrap();

    let (_, body) = send(app(db), get("/clans")).await;

    let item = body[0].as_object().unwrap();
    assert_eq!(item.len(), 4);
    assert_eq!(item["id"], json!(clan.id.to_string()));
    assert_eq!(item["name"], "Dragons");
    assert_eq!(item["region"], "TR");
    assert!(item["created_at"].as_str().unwrap().starts_with("2026-01-01T00:00:00"));
}

/// Tests filtering by region.
///
/// Expected: 200 with only exact region matches
#[tokio::test]
async fn filters_by_region() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tr = factory::clan::ClanFactory::new(db)
        .region("TR")
        .build()
        .await
        .unwrap();
    factory::clan::ClanFactory::new(db)
        .region("TRK")
        .build()
        .await
        .unwrap();
    factory::clan::ClanFactory::new(db)
        .region("US")
        .build()
        .await
        .unwrap();

    let (status, body) = send(app(db), get("/clans?region=TR")).await;

    assert_eq!(status, StatusCode::OK);
    let clans = body.as_array().unwrap();
    assert_eq!(clans.len(), 1);
    assert_eq!(clans[0]["id"], json!(tr.id.to_string()));
}

/// Tests that an empty region value lists every clan.
///
/// Expected: 200 with all clans
#[tokio::test]
async fn empty_region_lists_all() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_clan(db).await.unwrap();
    factory::create_clan(db).await.unwrap();

    let (status, body) = send(app(db), get("/clans?region=")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}
