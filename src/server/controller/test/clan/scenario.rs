use super::*;

fn contains_id(body: &Value, id: &str) -> bool {
    body.as_array()
        .unwrap()
        .iter()
        .any(|clan| clan["id"] == json!(id))
}

/// Tests the full clan lifecycle over HTTP.
///
/// Creates "Dragons" in TR, finds it by region and by name, deletes it,
/// then confirms the search no longer returns it.
///
/// Expected: 201, 200, 200, 200, 200 without the clan
#[tokio::test]
async fn create_find_delete_lifecycle() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db),
        post_json("/clans", json!({ "name": "Dragons", "region": "TR" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();
    assert!(Uuid::parse_str(&id).is_ok());

    let (status, body) = send(app(db), get("/clans?region=TR")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(contains_id(&body, &id));

    let (status, body) = send(app(db), get("/clans/search?name=drag")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(contains_id(&body, &id));

    let (status, _) = send(app(db), delete(&format!("/clans/{}", id))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app(db), get("/clans/search?name=drag")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!contains_id(&body, &id));
}

/// Tests that a newly created clan is listed before earlier ones.
///
/// Expected: the created clan is the first element of an unfiltered list
#[tokio::test]
async fn created_clan_is_listed_first() {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_clan(db).await.unwrap();
    factory::create_clan(db).await.unwrap();

    let (_, body) = send(
        app(db),
        post_json("/clans", json!({ "name": "Newcomers", "region": "US" })),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    let (_, body) = send(app(db), get("/clans")).await;

    let clans = body.as_array().unwrap();
    assert_eq!(clans.len(), 3);
    assert_eq!(clans[0]["id"], json!(id));
    assert_eq!(clans[0]["name"], "Newcomers");
    assert_eq!(clans[0]["region"], "US");
}
