//! Fantasy team domain models and roster rules.
//!
//! A roster holds exactly [`ROSTER_SIZE`] distinct players covering every
//! [`Position`]. The validators here are pure so the service can run them before
//! opening a transaction.

use std::collections::{BTreeSet, HashSet};

use crate::{
    model::{
        player::Position,
        team::{
            CreateTeamDto, RosterConflictDto, TeamComparisonDto, TeamDetailDto,
            TeamPlayerStatsDto, TeamSummaryDto, UpdateTeamDto,
        },
    },
    server::{
        error::{team::TeamError, AppError},
        model::stats::StatTotals,
    },
};

/// Number of players on every fantasy roster.
pub const ROSTER_SIZE: usize = 5;

const MISSING_FIELDS: &str = "Missing 'name_team' or 'players' in request body";

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.team_name,
        }
    }

    pub fn into_dto(self) -> TeamSummaryDto {
        TeamSummaryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// A player slotted into a roster at the position taken from their latest season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry {
    pub player_id: i32,
    pub position: Position,
}

/// A requested player who already belongs to another team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConflict {
    pub player_id: i32,
    pub player_name: String,
    pub team_id: i32,
}

impl RosterConflict {
    pub fn into_dto(self) -> RosterConflictDto {
        RosterConflictDto {
            player_id: self.player_id,
            player_name: self.player_name,
            team_id: self.team_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTeamParams {
    pub name: String,
    pub player_ids: Vec<i32>,
}

impl CreateTeamParams {
    /// Converts the request payload, rejecting bodies that omit the name or roster.
    ///
    /// # Returns
    /// - `Ok(CreateTeamParams)` - Both fields were present
    /// - `Err(AppError::BadRequest)` - `name_team` or `players` missing, or the name is blank
    pub fn from_dto(dto: CreateTeamDto) -> Result<Self, AppError> {
        let (Some(name), Some(player_ids)) = (dto.name_team, dto.players) else {
            return Err(AppError::BadRequest(MISSING_FIELDS.to_string()));
        };

        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest(MISSING_FIELDS.to_string()));
        }

        Ok(Self { name, player_ids })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTeamParams {
    pub id: i32,
    /// New name, `None` keeps the current one.
    pub name: Option<String>,
    pub player_ids: Vec<i32>,
}

impl UpdateTeamParams {
    /// Converts the request payload for the team at `id`.
    ///
    /// A missing roster is treated as an empty one so it fails the player count check
    /// after the team's existence has been confirmed. A blank name keeps the current name.
    pub fn from_dto(id: i32, dto: UpdateTeamDto) -> Self {
        let name = dto
            .name_team
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Self {
            id,
            name,
            player_ids: dto.players.unwrap_or_default(),
        }
    }
}

/// Checks the roster has exactly [`ROSTER_SIZE`] distinct player ids.
pub fn validate_player_ids(player_ids: &[i32]) -> Result<(), TeamError> {
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();
    for id in player_ids {
        if !seen.insert(*id) {
            duplicates.insert(*id);
        }
    }

    if !duplicates.is_empty() {
        return Err(TeamError::DuplicatePlayers(duplicates.into_iter().collect()));
    }

    if player_ids.len() != ROSTER_SIZE {
        return Err(TeamError::WrongPlayerCount {
            expected: ROSTER_SIZE,
            actual: player_ids.len(),
        });
    }

    Ok(())
}

/// Returns the positions no roster entry covers, in roster order.
pub fn missing_positions(entries: &[RosterEntry]) -> Vec<Position> {
    let covered: HashSet<Position> = entries.iter().map(|e| e.position).collect();

    Position::ALL
        .into_iter()
        .filter(|p| !covered.contains(p))
        .collect()
}

/// Aggregated stats for one rostered player across all of their seasons.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamPlayerStats {
    pub player_id: i32,
    pub player_name: String,
    pub position: Position,
    pub totals: StatTotals,
}

impl TeamPlayerStats {
    pub fn into_dto(self) -> TeamPlayerStatsDto {
        TeamPlayerStatsDto {
            player_id: self.player_id,
            player_name: self.player_name,
            position: self.position,
            points: self.totals.points,
            games: self.totals.games,
            two_percent: self.totals.two_percent(),
            three_percent: self.totals.three_percent(),
            atr: self.totals.atr(),
            ppg: self.totals.ppg(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamDetail {
    pub team: Team,
    /// Rostered players ordered PG, SG, SF, PF, C.
    pub players: Vec<TeamPlayerStats>,
}

impl TeamDetail {
    pub fn into_dto(self) -> TeamDetailDto {
        TeamDetailDto {
            team_id: self.team.id,
            team_name: self.team.name,
            players: self.players.into_iter().map(|p| p.into_dto()).collect(),
        }
    }
}

/// One side of a team comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamComparison {
    /// Set for fantasy teams, `None` for real-world teams compared by name.
    pub team_id: Option<i32>,
    pub team_name: String,
    pub totals: StatTotals,
}

impl TeamComparison {
    pub fn into_dto(self) -> TeamComparisonDto {
        TeamComparisonDto {
            team_id: self.team_id,
            team_name: self.team_name,
            points: self.totals.points,
            games: self.totals.games,
            two_percent: self.totals.two_percent(),
            three_percent: self.totals.three_percent(),
            atr: self.totals.atr(),
            ppg: self.totals.ppg(),
        }
    }
}

/// Orders comparisons by points per game, highest first. Ties keep request order.
pub fn rank_by_ppg(mut comparisons: Vec<TeamComparison>) -> Vec<TeamComparison> {
    comparisons.sort_by(|a, b| b.totals.ppg().total_cmp(&a.totals.ppg()));
    comparisons
}
