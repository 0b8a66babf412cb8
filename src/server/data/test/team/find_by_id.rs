use super::*;

/// Tests finding a team by id.
///
/// Expected: Ok(Some) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn finds_team_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let found = repo.find_by_id(team.id).await?;
    let missing = repo.find_by_id(team.id + 1).await?;

    assert_eq!(found.map(|t| t.name), Some(team.team_name));
    assert!(missing.is_none());

    Ok(())
}

/// Tests fetching several teams at once.
///
/// Expected: Ok with only the existing teams among the requested ids
#[tokio::test]
async fn finds_teams_by_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_team(db).await?;
    let second = factory::create_team(db).await?;
    factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let mut ids: Vec<i32> = repo
        .find_by_ids(&[first.id, second.id, 999])
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
