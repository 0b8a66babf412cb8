use super::*;

/// Tests loading memberships for several teams.
///
/// Expected: Ok with rows for the requested teams only
#[tokio::test]
async fn returns_memberships_for_requested_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_team_with_roster(db).await?;
    let (second, _) = factory::helpers::create_team_with_roster(db).await?;
    let (third, _) = factory::helpers::create_team_with_roster(db).await?;

    let repo = TeamPlayerRepository::new(db);
    let rows = repo.find_by_team_ids(&[first.id, second.id]).await?;

    assert_eq!(rows.len(), 10);
    assert!(rows.iter().all(|r| r.team_id != third.id));

    Ok(())
}
