use super::*;

/// Tests finding an existing player by exact name.
///
/// Expected: Ok(Some) with the matching player
#[tokio::test]
async fn finds_player_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::player::PlayerFactory::new(db)
        .name("Jayson Tatum")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let found = repo.find_by_name("Jayson Tatum").await?;

    let found = found.expect("player should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Jayson Tatum");

    Ok(())
}

/// Tests looking up a name nobody has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let found = repo.find_by_name("Nobody Atall").await?;

    assert!(found.is_none());

    Ok(())
}
