use sea_orm::DatabaseConnection;

use crate::{
    model::player::Position,
    server::{
        data::player_season::PlayerSeasonRepository,
        error::AppError,
        model::player::{Player, PlayerSeason, PlayerStatLine},
    },
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets per-season stat lines for every player who played a position.
    ///
    /// # Arguments
    /// - `position` - Position recorded on the season row
    /// - `season` - Restrict to one season when `Some`
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerStatLine>)` - Lines ordered by player name then season, empty when
    ///   nothing matches
    /// - `Err(AppError)` - Database error or unparseable stored row
    pub async fn stats_by_position(
        &self,
        position: Position,
        season: Option<i32>,
    ) -> Result<Vec<PlayerStatLine>, AppError> {
        let rows = PlayerSeasonRepository::new(self.db)
            .find_by_position(position, season)
            .await?;

        rows.into_iter()
            .map(|(season, player)| {
                Ok(PlayerStatLine {
                    player: Player::from_entity(player),
                    season: PlayerSeason::from_entity(season)?,
                })
            })
            .collect()
    }
}
