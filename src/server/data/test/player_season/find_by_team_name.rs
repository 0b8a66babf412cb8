use super::*;

/// Tests fetching every season tagged with a real-world team.
///
/// Expected: Ok with matching rows across players and seasons
#[tokio::test]
async fn returns_rows_for_team_abbreviation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_player(db).await?;
    let second = factory::create_player(db).await?;

    factory::player_season::PlayerSeasonFactory::new(db, first.id)
        .team("BOS")
        .season(2023)
        .build()
        .await?;
    factory::player_season::PlayerSeasonFactory::new(db, second.id)
        .team("BOS")
        .season(2024)
        .build()
        .await?;
    factory::player_season::PlayerSeasonFactory::new(db, first.id)
        .team("MIA")
        .season(2024)
        .build()
        .await?;

    let repo = PlayerSeasonRepository::new(db);
    let rows = repo.find_by_team_name("BOS").await?;

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.team == "BOS"));

    let none = repo.find_by_team_name("XYZ").await?;
    assert!(none.is_empty());

    Ok(())
}
