use super::*;

/// Tests deleting a team with a roster.
///
/// Expected: Ok(true), then no team, no membership rows, and no detail
#[tokio::test]
async fn deletes_team_and_roster() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, players) = factory::helpers::create_team_with_roster(db).await?;

    let service = TeamService::new(db);
    assert!(service.delete(team.id).await?);

    assert!(roster_ids(db, team.id).await?.is_empty());
    assert!(service.get_detail(team.id).await?.is_none());

    let remaining_players = entity::prelude::Player::find()
        .filter(entity::player::Column::Id.is_in(ids(&players)))
        .count(db)
        .await?;
    assert_eq!(remaining_players, 5);

    Ok(())
}

/// Tests deleting a team that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TeamService::new(db);

    assert!(!service.delete(55).await?);

    Ok(())
}
