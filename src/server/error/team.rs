use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{
        api::{ConflictErrorDto, ErrorDto},
        player::Position,
    },
    server::model::team::RosterConflict,
};

/// Roster validation and membership errors raised by team operations.
#[derive(Error, Debug)]
pub enum TeamError {
    /// Another team already uses the requested name.
    #[error("Team name already exists")]
    DuplicateName(String),

    /// The roster does not contain exactly five players.
    #[error("Team must have exactly {expected} players, got {actual}")]
    WrongPlayerCount { expected: usize, actual: usize },

    /// The same player id was listed more than once.
    #[error("Players listed more than once: {}", join_ids(.0))]
    DuplicatePlayers(Vec<i32>),

    /// A player id has no season rows, so no position can be resolved for it.
    #[error("Player {0} not found")]
    PlayerNotFound(i32),

    /// One or more required positions have no player.
    #[error("Missing players for positions: {}", join_positions(.0))]
    MissingPositions(Vec<Position>),

    /// Requested players already belong to a different team.
    #[error("Players already in other teams: {}", join_conflicts(.0))]
    PlayersOnOtherTeams(Vec<RosterConflict>),

    /// The roster unique index rejected the write because another request claimed a
    /// player or the name first.
    #[error("Team roster changed while saving, please retry")]
    ConcurrentModification,
}

fn join_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_positions(positions: &[Position]) -> String {
    positions
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_conflicts(conflicts: &[RosterConflict]) -> String {
    conflicts
        .iter()
        .map(|c| format!("{} (team {})", c.player_name, c.team_id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Converts team errors into 400 Bad Request responses.
///
/// Conflicts carry the offending players in a `conflicts` array alongside the message.
impl IntoResponse for TeamError {
    fn into_response(self) -> Response {
        let error = self.to_string();

        match self {
            Self::PlayersOnOtherTeams(conflicts) => (
                StatusCode::BAD_REQUEST,
                Json(ConflictErrorDto {
                    error,
                    conflicts: conflicts.into_iter().map(|c| c.into_dto()).collect(),
                }),
            )
                .into_response(),
            _ => (StatusCode::BAD_REQUEST, Json(ErrorDto { error })).into_response(),
        }
    }
}
