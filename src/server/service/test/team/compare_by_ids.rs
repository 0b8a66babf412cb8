use super::*;

/// Sets every season row of the given players to the same scoring line.
async fn set_scoring(
    db: &DatabaseConnection,
    players: &[entity::player::Model],
    points: i32,
    games: i32,
) -> Result<(), DbErr> {
    entity::prelude::PlayerSeason::update_many()
        .filter(entity::player_season::Column::PlayerId.is_in(ids(players)))
        .col_expr(
            entity::player_season::Column::Points,
            sea_orm::sea_query::Expr::value(points),
        )
        .col_expr(
            entity::player_season::Column::Games,
            sea_orm::sea_query::Expr::value(games),
        )
        .exec(db)
        .await?;
    Ok(())
}

/// Tests that the higher scoring team comes first regardless of request order.
///
/// Expected: Ok with [A, B] when A has the higher aggregate PPG
#[tokio::test]
async fn orders_teams_by_ppg_descending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (strong, strong_players) = factory::helpers::create_team_with_roster(db).await?;
    let (weak, weak_players) = factory::helpers::create_team_with_roster(db).await?;
    set_scoring(db, &strong_players, 2000, 80).await?;
    set_scoring(db, &weak_players, 800, 80).await?;

    let service = TeamService::new(db);
    let ranked = service.compare_by_ids(vec![weak.id, strong.id]).await?;

    let order: Vec<Option<i32>> = ranked.iter().map(|c| c.team_id).collect();
    assert_eq!(order, vec![Some(strong.id), Some(weak.id)]);

    let top = ranked[0].clone().into_dto();
    assert_eq!(top.points, 10_000);
    assert_eq!(top.games, 400);
    assert_eq!(top.ppg, 25.0);

    Ok(())
}

/// Tests that teams with equal PPG keep request order.
///
/// Expected: Ok with the requested order preserved
#[tokio::test]
async fn keeps_request_order_for_ties() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_team_with_roster(db).await?;
    let (second, _) = factory::helpers::create_team_with_roster(db).await?;
    let (third, _) = factory::helpers::create_team_with_roster(db).await?;

    let service = TeamService::new(db);
    let ranked = service
        .compare_by_ids(vec![third.id, first.id, second.id])
        .await?;

    let order: Vec<Option<i32>> = ranked.iter().map(|c| c.team_id).collect();
    assert_eq!(order, vec![Some(third.id), Some(first.id), Some(second.id)]);

    Ok(())
}

/// Tests comparing a single team.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_two_teams() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _) = factory::helpers::create_team_with_roster(db).await?;

    let service = TeamService::new(db);
    let result = service.compare_by_ids(vec![team.id]).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests comparing against an id that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _) = factory::helpers::create_team_with_roster(db).await?;

    let service = TeamService::new(db);
    let result = service.compare_by_ids(vec![team.id, 4040]).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Team with ID 4040 does not exist"),
        other => panic!("unexpected result: {:?}", other),
    }

    Ok(())
}
