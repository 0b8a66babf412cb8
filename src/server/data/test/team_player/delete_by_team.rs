use super::*;

/// Tests removing a team's roster.
///
/// Expected: Ok with five rows removed and other rosters untouched
#[tokio::test]
async fn removes_only_that_teams_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _) = factory::helpers::create_team_with_roster(db).await?;
    let (other, _) = factory::helpers::create_team_with_roster(db).await?;

    let repo = TeamPlayerRepository::new(db);
    let removed = repo.delete_by_team(team.id).await?;

    assert_eq!(removed, 5);

    let remaining = entity::prelude::TeamPlayer::find().all(db).await?;
    assert_eq!(remaining.len(), 5);
    assert!(remaining.iter().all(|r| r.team_id == other.id));

    Ok(())
}
