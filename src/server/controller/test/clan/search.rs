use super::*;

/// Tests that search terms shorter than three characters are rejected.
///
/// Expected: 422 pointing at the name query parameter
#[tokio::test]
async fn rejects_short_term() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), get("/clans/search?name=dr")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["query", "name"]));
    assert_eq!(
        body["detail"][0]["msg"],
        "String should have at least 3 characters"
    );
}

/// Tests that a missing search term is rejected.
///
/// Expected: 422
#[tokio::test]
async fn rejects_missing_term() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = send(app(db), get("/clans/search")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

/// Tests that a three character term is accepted even with no matches.
///
/// Expected: 200 with empty array
#[tokio::test]
async fn accepts_three_character_term() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), get("/clans/search?name=xyz")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// Tests case-insensitive matching.
///
/// Expected: "Alpha" found by both "alp" and "ALP"
#[tokio::test]
async fn matches_ignoring_case() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alpha = factory::clan::ClanFactory::new(db)
        .name("Alpha")
        .build()
        .await
        .unwrap();

    for uri in ["/clans/search?name=alp", "/clans/search?name=ALP"] {
        let (status, body) = send(app(db), get(uri)).await;

        assert_eq!(status, StatusCode::OK);
        let clans = body.as_array().unwrap();
        assert_eq!(clans.len(), 1, "{}", uri);
        assert_eq!(clans[0]["id"], json!(alpha.id.to_string()));
    }
}
