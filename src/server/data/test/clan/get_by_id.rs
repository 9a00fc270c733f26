use super::*;

/// Tests getting a clan by id.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_clan_when_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::clan::ClanFactory::new(db)
        .name("Dragons")
        .region("TR")
        .build()
        .await?;

    let repo = ClanRepository::new(db);
    let clan = repo.get_by_id(created.id).await?;

    assert!(clan.is_some());
    let clan = clan.unwrap();
    assert_eq!(clan.id, created.id);
    assert_eq!(clan.name, "Dragons");
    assert_eq!(clan.region, "TR");
    assert_eq!(clan.created_at, created.created_at);

    Ok(())
}

/// Tests getting a clan that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_clan(db).await?;

    let repo = ClanRepository::new(db);
    let clan = repo.get_by_id(Uuid::new_v4()).await?;

    assert!(clan.is_none());

    Ok(())
}
