use super::*;

/// Tests inserting a full roster.
///
/// Expected: Ok with five membership rows carrying their positions
#[tokio::test]
async fn inserts_roster_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let players = factory::helpers::create_full_roster(db).await?;

    let repo = TeamPlayerRepository::new(db);
    repo.insert_roster(team.id, &roster_for(&players)).await?;

    let rows = entity::prelude::TeamPlayer::find()
        .filter(entity::team_player::Column::TeamId.eq(team.id))
        .all(db)
        .await?;
    assert_eq!(rows.len(), 5);

    let center = rows
        .iter()
        .find(|r| r.player_id == players[4].id)
        .expect("center should be rostered");
    assert_eq!(center.position, "C");

    Ok(())
}

/// Tests that a player cannot be inserted onto a second roster.
///
/// Expected: Err from the unique index on player_id
#[tokio::test]
async fn rejects_player_already_on_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, players) = factory::helpers::create_team_with_roster(db).await?;
    let other = factory::create_team(db).await?;

    let repo = TeamPlayerRepository::new(db);
    let result = repo
        .insert_roster(
            other.id,
            &[RosterEntry {
                player_id: players[0].id,
                position: Position::PG,
            }],
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
