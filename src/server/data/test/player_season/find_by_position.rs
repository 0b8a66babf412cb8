use super::*;

/// Tests that rows come back ordered by player name, then season.
///
/// Expected: Ok with rows for the position only, sorted
#[tokio::test]
async fn returns_rows_for_position_ordered_by_name_and_season() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zion = factory::player::PlayerFactory::new(db)
        .name("Zion Williamson")
        .build()
        .await?;
    let bam = factory::player::PlayerFactory::new(db)
        .name("Bam Adebayo")
        .build()
        .await?;
    let guard = factory::player::PlayerFactory::new(db)
        .name("Chris Paul")
        .build()
        .await?;

    factory::player_season::PlayerSeasonFactory::new(db, zion.id)
        .position("C")
        .season(2024)
        .build()
        .await?;
    factory::player_season::PlayerSeasonFactory::new(db, bam.id)
        .position("C")
        .season(2024)
        .build()
        .await?;
    factory::player_season::PlayerSeasonFactory::new(db, bam.id)
        .position("C")
        .season(2023)
        .build()
        .await?;
    factory::player_season::PlayerSeasonFactory::new(db, guard.id)
        .position("PG")
        .season(2024)
        .build()
        .await?;

    let repo = PlayerSeasonRepository::new(db);
    let rows = repo.find_by_position(Position::C, None).await?;

    let keys: Vec<(String, i32)> = rows
        .iter()
        .map(|(season, player)| (player.player_name.clone(), season.season))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("Bam Adebayo".to_string(), 2023),
            ("Bam Adebayo".to_string(), 2024),
            ("Zion Williamson".to_string(), 2024),
        ]
    );

    Ok(())
}

/// Tests filtering to a single season.
///
/// Expected: Ok with only that season's rows
#[tokio::test]
async fn filters_by_season() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    for season in [2022, 2023, 2024] {
        factory::player_season::PlayerSeasonFactory::new(db, player.id)
            .position("SF")
            .season(season)
            .build()
            .await?;
    }

    let repo = PlayerSeasonRepository::new(db);
    let rows = repo.find_by_position(Position::SF, Some(2023)).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.season, 2023);
    assert_eq!(rows[0].1.id, player.id);

    Ok(())
}

/// Tests a season filter that matches nothing.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unmatched_season() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    factory::create_player_season(db, player.id, "PF").await?;

    let repo = PlayerSeasonRepository::new(db);
    let rows = repo.find_by_position(Position::PF, Some(1999)).await?;

    assert!(rows.is_empty());

    Ok(())
}
