use super::*;
use crate::model::player::Position;
use crate::server::{
    data::{team::TeamRepository, team_player::TeamPlayerRepository},
    model::team::RosterEntry,
    service::team::roster_write_err,
};

/// Tests that a second membership row for an already rostered player maps to a conflict.
///
/// Expected: TeamErr(ConcurrentModification)
#[tokio::test]
async fn maps_roster_unique_violation_to_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, players) = factory::helpers::create_team_with_roster(db).await?;
    let other = factory::create_team(db).await?;

    let err = TeamPlayerRepository::new(db)
        .insert_roster(
            other.id,
            &[RosterEntry {
                player_id: players[0].id,
                position: Position::PG,
            }],
        )
        .await
        .expect_err("player is already on a roster");

    assert!(matches!(
        roster_write_err(err),
        AppError::TeamErr(TeamError::ConcurrentModification)
    ));

    Ok(())
}

/// Tests that a duplicate team name written past the service check maps to a conflict.
///
/// Expected: TeamErr(ConcurrentModification)
#[tokio::test]
async fn maps_team_name_unique_violation_to_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_team(db).await?;

    let err = TeamRepository::new(db)
        .create(existing.team_name.clone())
        .await
        .expect_err("team name is unique");

    assert!(matches!(
        roster_write_err(err),
        AppError::TeamErr(TeamError::ConcurrentModification)
    ));

    Ok(())
}

/// Tests that errors other than unique violations stay storage errors.
///
/// Expected: DbErr passed through unchanged
#[test]
fn passes_other_errors_through() {
    let err = roster_write_err(DbErr::RecordNotFound("team".to_string()));

    assert!(matches!(err, AppError::DbErr(DbErr::RecordNotFound(_))));
}
