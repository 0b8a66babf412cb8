use super::*;

/// Tests that players on an existing roster are reported with their team.
///
/// Expected: Ok with one conflict for the rostered player
#[tokio::test]
async fn reports_players_on_other_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, players) = factory::helpers::create_team_with_roster(db).await?;
    let free_agent = factory::create_player(db).await?;

    let repo = TeamPlayerRepository::new(db);
    let conflicts = repo
        .find_conflicts(&[players[2].id, free_agent.id], None)
        .await?;

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].player_id, players[2].id);
    assert_eq!(conflicts[0].player_name, players[2].player_name);
    assert_eq!(conflicts[0].team_id, team.id);

    Ok(())
}

/// Tests that memberships on the excluded team are not conflicts.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn ignores_excluded_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, players) = factory::helpers::create_team_with_roster(db).await?;
    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();

    let repo = TeamPlayerRepository::new(db);
    let conflicts = repo.find_conflicts(&ids, Some(team.id)).await?;

    assert!(conflicts.is_empty());

    Ok(())
}
