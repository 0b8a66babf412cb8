//! Player and season domain models.
//!
//! Season rows are converted from entity models in the service layer, where a stored
//! position string becomes a typed [`Position`].

use crate::{
    model::player::{PlayerStatsDto, Position},
    server::{
        error::AppError,
        model::stats::{calculate_atr, calculate_ppg},
        util::parse::parse_position_from_string,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub name: String,
}

impl Player {
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.player_name,
        }
    }
}

/// One player's totals for one season.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeason {
    pub id: i32,
    pub player_id: i32,
    pub season: i32,
    /// Abbreviation of the real-world team the player was on.
    pub team: String,
    pub position: Position,
    pub points: i32,
    pub games: i32,
    pub two_percent: Option<f64>,
    pub three_percent: Option<f64>,
    pub assists: i32,
    pub turnovers: i32,
}

impl PlayerSeason {
    /// Converts an entity model to a season domain model.
    ///
    /// # Arguments
    /// - `entity` - The season row from the database
    ///
    /// # Returns
    /// - `Ok(PlayerSeason)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStoredPosition))` - The stored position is not
    ///   one of the five position codes
    pub fn from_entity(entity: entity::player_season::Model) -> Result<Self, AppError> {
        let position = parse_position_from_string(entity.position)?;

        Ok(Self {
            id: entity.id,
            player_id: entity.player_id,
            season: entity.season,
            team: entity.team,
            position,
            points: entity.points,
            games: entity.games,
            two_percent: entity.two_percent,
            three_percent: entity.three_percent,
            assists: entity.assists,
            turnovers: entity.turnovers,
        })
    }

    pub fn atr(&self) -> Option<f64> {
        calculate_atr(self.assists as i64, self.turnovers as i64)
    }

    pub fn ppg(&self) -> f64 {
        calculate_ppg(self.points as i64, self.games as i64)
    }
}

/// A season row joined with its player's name, as returned by the position query.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatLine {
    pub player: Player,
    pub season: PlayerSeason,
}

impl PlayerStatLine {
    pub fn into_dto(self) -> PlayerStatsDto {
        let atr = self.season.atr();
        let ppg = self.season.ppg();

        PlayerStatsDto {
            player_id: self.player.id,
            player_name: self.player.name,
            team: self.season.team,
            season: self.season.season,
            points: self.season.points,
            games: self.season.games,
            two_percent: self.season.two_percent,
            three_percent: self.season.three_percent,
            atr,
            ppg,
        }
    }
}

/// Parameters for inserting one season row during ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayerSeason {
    pub player_id: i32,
    pub season: i32,
    pub team: String,
    pub position: Position,
    pub points: i32,
    pub games: i32,
    pub two_percent: Option<f64>,
    pub three_percent: Option<f64>,
    pub assists: i32,
    pub turnovers: i32,
}

impl NewPlayerSeason {
    /// Snapshot of assists per turnover stored alongside the row.
    pub fn atr(&self) -> Option<f64> {
        calculate_atr(self.assists as i64, self.turnovers as i64)
    }

    /// Snapshot of points per game stored alongside the row.
    pub fn ppg(&self) -> f64 {
        calculate_ppg(self.points as i64, self.games as i64)
    }
}
