use super::*;

/// Tests creating a clan.
///
/// Verifies that the repository stores the name and region and generates
/// an id and creation timestamp.
///
/// Expected: Ok with clan persisted
#[tokio::test]
async fn creates_clan_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanRepository::new(db);
    let clan = repo
        .create(CreateClanParams {
            name: "Dragons".to_string(),
            region: "TR".to_string(),
        })
        .await?;

    assert_eq!(clan.name, "Dragons");
    assert_eq!(clan.region, "TR");
    assert_ne!(clan.id, Uuid::nil());

    let db_clan = entity::prelude::Clan::find_by_id(clan.id).one(db).await?;
    assert!(db_clan.is_some());
    let db_clan = db_clan.unwrap();
    assert_eq!(db_clan.name, "Dragons");
    assert_eq!(db_clan.created_at, clan.created_at);

    Ok(())
}

/// Tests that every created clan receives a distinct id.
///
/// Expected: Ok with two different ids and two rows
#[tokio::test]
async fn generates_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanRepository::new(db);
    let params = CreateClanParams {
        name: "Dragons".to_string(),
        region: "TR".to_string(),
    };

    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::Clan::find().count(db).await?, 2);

    Ok(())
}

/// Tests that creation timestamps follow insertion order.
///
/// Expected: Ok with the later insert having a timestamp no earlier than the first
#[tokio::test]
async fn sets_non_decreasing_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanRepository::new(db);
    let first = repo
        .create(CreateClanParams {
            name: "First".to_string(),
            region: "US".to_string(),
        })
        .await?;
    let second = repo
        .create(CreateClanParams {
            name: "Second".to_string(),
            region: "US".to_string(),
        })
        .await?;

    assert!(second.created_at >= first.created_at);

    Ok(())
}
