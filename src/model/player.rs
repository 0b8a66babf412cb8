use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use utoipa::ToSchema;

/// Basketball roster positions.
///
/// A fantasy roster holds exactly one player for each position, in the order listed
/// by [`Position::ALL`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    /// Every required roster position.
    pub const ALL: [Position; 5] = [
        Position::PG,
        Position::SG,
        Position::SF,
        Position::PF,
        Position::C,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the five position codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid position '{0}'")]
pub struct InvalidPosition(pub String);

impl FromStr for Position {
    type Err = InvalidPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PG" => Ok(Position::PG),
            "SG" => Ok(Position::SG),
            "SF" => Ok(Position::SF),
            "PF" => Ok(Position::PF),
            "C" => Ok(Position::C),
            _ => Err(InvalidPosition(s.to_string())),
        }
    }
}

/// One player's stat line for a single season.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PlayerStatsDto {
    pub player_id: i32,
    pub player_name: String,
    pub team: String,
    pub season: i32,
    pub points: i32,
    pub games: i32,
    pub two_percent: Option<f64>,
    pub three_percent: Option<f64>,
    /// Assists per turnover, `null` when the player committed no turnovers.
    pub atr: Option<f64>,
    /// Points per game, `0` when no games were played.
    pub ppg: f64,
}
