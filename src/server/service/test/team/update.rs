use super::*;

/// Tests replacing a roster and renaming the team.
///
/// Expected: Ok(Some) with the new name and only the new players rostered
#[tokio::test]
async fn replaces_roster_and_renames() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _) = factory::helpers::create_team_with_roster(db).await?;
    let replacements = factory::helpers::create_full_roster(db).await?;

    let service = TeamService::new(db);
    let updated = service
        .update(UpdateTeamParams {
            id: team.id,
            name: Some("Rebuilt".to_string()),
            player_ids: ids(&replacements),
        })
        .await?
        .expect("team should exist");

    assert_eq!(updated.name, "Rebuilt");

    let mut expected = ids(&replacements);
    expected.sort();
    assert_eq!(roster_ids(db, team.id).await?, expected);

    Ok(())
}

/// Tests keeping the same players while only renaming.
///
/// Expected: Ok(Some) since the team's own players are not conflicts
#[tokio::test]
async fn allows_keeping_own_players() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, players) = factory::helpers::create_team_with_roster(db).await?;

    let service = TeamService::new(db);
    let updated = service
        .update(UpdateTeamParams {
            id: team.id,
            name: None,
            player_ids: ids(&players),
        })
        .await?;

    assert_eq!(updated.map(|t| t.name), Some(team.team_name));

    Ok(())
}

/// Tests updating a team to include a player from a different team.
///
/// Expected: Err(PlayersOnOtherTeams) and the original roster unchanged
#[tokio::test]
async fn rejects_player_from_other_team_and_keeps_roster() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, players) = factory::helpers::create_team_with_roster(db).await?;
    let (other, other_players) = factory::helpers::create_team_with_roster(db).await?;

    let mut requested = ids(&players);
    requested[4] = other_players[4].id;

    let service = TeamService::new(db);
    let result = service
        .update(UpdateTeamParams {
            id: team.id,
            name: None,
            player_ids: requested,
        })
        .await;

    match result {
        Err(AppError::TeamErr(TeamError::PlayersOnOtherTeams(conflicts))) => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].player_id, other_players[4].id);
            assert_eq!(conflicts[0].team_id, other.id);
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let mut expected = ids(&players);
    expected.sort();
    assert_eq!(roster_ids(db, team.id).await?, expected);

    Ok(())
}

/// Tests renaming to another team's name.
///
/// Expected: Err(DuplicateName)
#[tokio::test]
async fn rejects_name_of_other_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, players) = factory::helpers::create_team_with_roster(db).await?;
    let (other, _) = factory::helpers::create_team_with_roster(db).await?;

    let service = TeamService::new(db);
    let result = service
        .update(UpdateTeamParams {
            id: team.id,
            name: Some(other.team_name.clone()),
            player_ids: ids(&players),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::TeamErr(TeamError::DuplicateName(_)))
    ));

    Ok(())
}

/// Tests updating a team that does not exist, even with an invalid roster.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TeamService::new(db);
    let result = service
        .update(UpdateTeamParams {
            id: 321,
            name: None,
            player_ids: vec![],
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
