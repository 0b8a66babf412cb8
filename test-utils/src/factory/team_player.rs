//! Roster membership factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a player to a team roster at the given position.
///
/// # Returns
/// - `Ok(entity::team_player::Model)` - Created membership row
/// - `Err(DbErr)` - Database error, including a unique violation when the player is
///   already on another roster
pub async fn add_team_player(
    db: &DatabaseConnection,
    team_id: i32,
    player_id: i32,
    position: &str,
) -> Result<entity::team_player::Model, DbErr> {
    entity::team_player::ActiveModel {
        team_id: ActiveValue::Set(team_id),
        player_id: ActiveValue::Set(player_id),
        position: ActiveValue::Set(position.to_string()),
    }
    .insert(db)
    .await
}
