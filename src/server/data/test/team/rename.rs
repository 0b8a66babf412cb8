use super::*;

/// Tests renaming a team.
///
/// Expected: Ok with the new name stored
#[tokio::test]
async fn renames_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let renamed = repo.rename(team.id, "Lob City".to_string()).await?;

    assert_eq!(renamed.id, team.id);
    assert_eq!(renamed.name, "Lob City");

    let stored = entity::prelude::Team::find_by_id(team.id).one(db).await?;
    assert_eq!(stored.map(|t| t.team_name), Some("Lob City".to_string()));

    Ok(())
}

/// Tests renaming a team that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let result = repo.rename(77, "Ghosts".to_string()).await;

    assert!(result.is_err());

    Ok(())
}
