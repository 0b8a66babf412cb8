//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{
    player::PlayerFactory, player_season::PlayerSeasonFactory, team::create_team,
    team_player::add_team_player,
};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Positions in roster order.
pub const ROSTER_POSITIONS: [&str; 5] = ["PG", "SG", "SF", "PF", "C"];

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a player with a single season row at the given position.
///
/// # Arguments
/// - `db` - Database connection
/// - `position` - Position code stored on the season row
/// - `season` - Season year
///
/// # Returns
/// - `Ok((player, season))` - The inserted player and season rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_player_at_position(
    db: &DatabaseConnection,
    position: &str,
    season: i32,
) -> Result<(entity::player::Model, entity::player_season::Model), DbErr> {
    let player = PlayerFactory::new(db).build().await?;
    let season = PlayerSeasonFactory::new(db, player.id)
        .season(season)
        .position(position)
        .build()
        .await?;

    Ok((player, season))
}

/// Creates five players, one per roster position, each with a 2024 season row.
///
/// Players are returned in `PG, SG, SF, PF, C` order.
pub async fn create_full_roster(
    db: &DatabaseConnection,
) -> Result<Vec<entity::player::Model>, DbErr> {
    let mut players = Vec::with_capacity(ROSTER_POSITIONS.len());

    for position in ROSTER_POSITIONS {
        let (player, _) = create_player_at_position(db, position, 2024).await?;
        players.push(player);
    }

    Ok(players)
}

/// Creates a team and a full five-player roster attached to it.
///
/// # Returns
/// - `Ok((team, players))` - The team and its players in `PG, SG, SF, PF, C` order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_roster(
    db: &DatabaseConnection,
) -> Result<(entity::team::Model, Vec<entity::player::Model>), DbErr> {
    let team = create_team(db).await?;
    let players = create_full_roster(db).await?;

    for (player, position) in players.iter().zip(ROSTER_POSITIONS) {
        add_team_player(db, team.id, player.id, position).await?;
    }

    Ok((team, players))
}
