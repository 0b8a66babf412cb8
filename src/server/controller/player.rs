use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        player::{PlayerStatsDto, Position},
    },
    server::{error::AppError, service::player::PlayerService, state::AppState},
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

const INVALID_POSITION: &str = "Position is required and must be one of PG, SG, SF, PF, C";

#[derive(Deserialize)]
pub struct PlayerQuery {
    pub position: Option<String>,
    pub season: Option<i32>,
}

/// Get per-season stats for players at a position.
///
/// Returns one record per player season with assists per turnover and points per game
/// computed from the season totals, ordered by player name then season.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Required `position` and optional `season`
///
/// # Returns
/// - `200 OK` - Stat records, empty when nothing matches
/// - `400 Bad Request` - Position missing or invalid, or season not an integer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(
        ("position" = String, Query, description = "One of PG, SG, SF, PF, C"),
        ("season" = Option<i32>, Query, description = "Restrict to one season")
    ),
    responses(
        (status = 200, description = "Successfully retrieved player stats", body = Vec<PlayerStatsDto>),
        (status = 400, description = "Missing or invalid position", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    query: Result<Query<PlayerQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let position = query
        .position
        .as_deref()
        .and_then(|p| p.parse::<Position>().ok())
        .ok_or_else(|| AppError::BadRequest(INVALID_POSITION.to_string()))?;

    let service = PlayerService::new(&state.db);

    let stats: Vec<PlayerStatsDto> = service
        .stats_by_position(position, query.season)
        .await?
        .into_iter()
        .map(|line| line.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(stats)))
}
