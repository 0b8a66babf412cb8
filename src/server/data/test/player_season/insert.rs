use super::*;

/// Tests inserting a new season row.
///
/// Verifies the row is stored with its derived snapshot columns.
///
/// Expected: Ok with inserted flag set
#[tokio::test]
async fn inserts_new_season() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerSeasonRepository::new(db);
    let (id, inserted) = repo.insert(new_season(player.id, 2024)).await?;

    assert!(inserted);

    let stored = entity::prelude::PlayerSeason::find_by_id(id)
        .one(db)
        .await?
        .expect("season row should exist");
    assert_eq!(stored.position, "C");
    assert_eq!(stored.points, 2085);
    assert_eq!(stored.ppg_ratio, Some(2085.0 / 79.0));
    assert_eq!(stored.atr, Some(708.0 / 237.0));

    Ok(())
}

/// Tests inserting the same player and season twice.
///
/// Expected: Ok with same id, second call reports no insert, one row stored
#[tokio::test]
async fn ignores_duplicate_player_season() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerSeasonRepository::new(db);
    let (first_id, first_inserted) = repo.insert(new_season(player.id, 2023)).await?;
    let mut changed = new_season(player.id, 2023);
    changed.points = 1;
    let (second_id, second_inserted) = repo.insert(changed).await?;

    assert!(first_inserted);
    assert!(!second_inserted);
    assert_eq!(first_id, second_id);

    let count = entity::prelude::PlayerSeason::find().count(db).await?;
    assert_eq!(count, 1);

    let stored = entity::prelude::PlayerSeason::find_by_id(first_id)
        .one(db)
        .await?
        .expect("season row should exist");
    assert_eq!(stored.points, 2085);

    Ok(())
}

/// Tests that the ATR snapshot is empty when a player had no turnovers.
///
/// Expected: Ok with atr column null
#[tokio::test]
async fn stores_null_atr_without_turnovers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let mut params = new_season(player.id, 2022);
    params.turnovers = 0;
    params.games = 0;

    let repo = PlayerSeasonRepository::new(db);
    let (id, _) = repo.insert(params).await?;

    let stored = entity::prelude::PlayerSeason::find_by_id(id)
        .one(db)
        .await?
        .expect("season row should exist");
    assert_eq!(stored.atr, None);
    assert_eq!(stored.ppg_ratio, Some(0.0));

    Ok(())
}
