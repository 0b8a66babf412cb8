use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::player::Position;

/// Payload for creating a team. Both fields are required; they are optional here so a
/// missing field produces a descriptive 400 instead of a deserialization rejection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateTeamDto {
    pub name_team: Option<String>,
    pub players: Option<Vec<i32>>,
}

/// Payload for replacing a team's roster and optionally renaming it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateTeamDto {
    #[serde(default)]
    pub name_team: Option<String>,
    pub players: Option<Vec<i32>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TeamCreatedDto {
    pub message: String,
    pub team_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TeamSummaryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TeamPlayerStatsDto {
    pub player_id: i32,
    pub player_name: String,
    pub position: Position,
    pub points: i64,
    pub games: i64,
    pub two_percent: Option<f64>,
    pub three_percent: Option<f64>,
    pub atr: Option<f64>,
    pub ppg: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TeamDetailDto {
    pub team_id: i32,
    pub team_name: String,
    pub players: Vec<TeamPlayerStatsDto>,
}

/// Aggregated stats for one team in a comparison. `team_id` is absent when comparing
/// real teams by name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TeamComparisonDto {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub team_id: Option<i32>,
    pub team_name: String,
    pub points: i64,
    pub games: i64,
    pub two_percent: Option<f64>,
    pub three_percent: Option<f64>,
    pub atr: Option<f64>,
    pub ppg: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct RosterConflictDto {
    pub player_id: i32,
    pub player_name: String,
    pub team_id: i32,
}
