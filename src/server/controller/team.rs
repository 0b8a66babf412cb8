use std::collections::HashMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ConflictErrorDto, ErrorDto, MessageDto},
        team::{
            CreateTeamDto, TeamComparisonDto, TeamCreatedDto, TeamDetailDto, TeamSummaryDto,
            UpdateTeamDto,
        },
    },
    server::{
        error::{team::TeamError, AppError},
        model::team::{CreateTeamParams, UpdateTeamParams},
        service::team::TeamService,
        state::AppState,
        util::parse::{numbered_query_values, parse_team_id},
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

fn team_not_found(team_id: i32) -> AppError {
    AppError::NotFound(format!("Team with ID {} does not exist", team_id))
}

/// List all fantasy teams.
///
/// # Returns
/// - `200 OK` - Teams ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved teams", body = Vec<TeamSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    let teams: Vec<TeamSummaryDto> = service
        .list()
        .await?
        .into_iter()
        .map(|t| t.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(teams)))
}

/// Create a fantasy team.
///
/// Requires a unique name and exactly five distinct players whose most recent seasons
/// cover PG, SG, SF, PF and C. Players already on another team are rejected.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Team name and player ids
///
/// # Returns
/// - `201 Created` - Team created, body carries the new id
/// - `400 Bad Request` - Missing fields, invalid roster, duplicate name, or conflicts
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Successfully created team", body = TeamCreatedDto),
        (status = 400, description = "Invalid team data or players on other teams", body = ConflictErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    payload: Result<Json<CreateTeamDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = TeamService::new(&state.db);

    // Convert DTO to server model
    let params = CreateTeamParams::from_dto(payload)?;
    let name = params.name.clone();

    let team = service
        .create(params)
        .await?
        .ok_or(TeamError::DuplicateName(name))?;

    Ok((
        StatusCode::CREATED,
        Json(TeamCreatedDto {
            message: "Team created successfully".to_string(),
            team_id: team.id,
        }),
    ))
}

/// Get a team with per-player career totals.
///
/// # Returns
/// - `200 OK` - Team detail with players ordered PG, SG, SF, PF, C
/// - `400 Bad Request` - Team id is not an integer
/// - `404 Not Found` - Team does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved team", body = TeamDetailDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    team_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(team_id) = team_id?;

    let service = TeamService::new(&state.db);

    let detail = service
        .get_detail(team_id)
        .await?
        .ok_or_else(|| team_not_found(team_id))?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Replace a team's roster and optionally rename it.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `team_id` - Team to update
/// - `payload` - Optional new name and the full new roster
///
/// # Returns
/// - `200 OK` - Team updated
/// - `400 Bad Request` - Invalid roster, name taken, or players on other teams
/// - `404 Not Found` - Team does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Successfully updated team", body = MessageDto),
        (status = 400, description = "Invalid team data or players on other teams", body = ConflictErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    team_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateTeamDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(team_id) = team_id?;
    let Json(payload) = payload?;

    let service = TeamService::new(&state.db);

    let params = UpdateTeamParams::from_dto(team_id, payload);

    service
        .update(params)
        .await?
        .ok_or_else(|| team_not_found(team_id))?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Team updated successfully".to_string(),
        }),
    ))
}

/// Delete a team and its roster.
///
/// # Returns
/// - `200 OK` - Team deleted
/// - `404 Not Found` - Team does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted team", body = MessageDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    team_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(team_id) = team_id?;

    let service = TeamService::new(&state.db);

    if !service.delete(team_id).await? {
        return Err(team_not_found(team_id));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Team with ID {} deleted successfully", team_id),
        }),
    ))
}

/// Compare fantasy teams by id.
///
/// Takes `team1`, `team2`, ... `teamN` query parameters. Each team's row sums the
/// career totals of its rostered players. Rows are ordered by points per game,
/// highest first.
///
/// # Returns
/// - `200 OK` - Ranked comparison rows
/// - `400 Bad Request` - Fewer than two ids, or an id is not an integer
/// - `404 Not Found` - An id does not match a team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teams/compare",
    tag = TEAM_TAG,
    params(
        ("team1" = i32, Query, description = "First team ID"),
        ("team2" = i32, Query, description = "Second team ID; further teamN parameters are accepted")
    ),
    responses(
        (status = 200, description = "Successfully compared teams", body = Vec<TeamComparisonDto>),
        (status = 400, description = "Fewer than two or non-numeric team IDs", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn compare_teams(
    State(state): State<AppState>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let ids = numbered_query_values(&params, "team")
        .iter()
        .map(|value| parse_team_id(value))
        .collect::<Result<Vec<_>, _>>()?;

    let service = TeamService::new(&state.db);

    let ranked: Vec<TeamComparisonDto> = service
        .compare_by_ids(ids)
        .await?
        .into_iter()
        .map(|c| c.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(ranked)))
}

/// Compare real-world teams by name.
///
/// Takes two or three `team1`..`team3` query parameters holding team abbreviations.
/// Each row sums every season row recorded for that team.
///
/// # Returns
/// - `200 OK` - Ranked comparison rows without team ids
/// - `400 Bad Request` - Fewer than two or more than three names
/// - `404 Not Found` - A name has no season rows
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teams/stats",
    tag = TEAM_TAG,
    params(
        ("team1" = String, Query, description = "First team abbreviation"),
        ("team2" = String, Query, description = "Second team abbreviation"),
        ("team3" = Option<String>, Query, description = "Optional third team abbreviation")
    ),
    responses(
        (status = 200, description = "Successfully compared teams", body = Vec<TeamComparisonDto>),
        (status = 400, description = "Wrong number of team names", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn compare_teams_by_name(
    State(state): State<AppState>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let names = numbered_query_values(&params, "team");

    let service = TeamService::new(&state.db);

    let ranked: Vec<TeamComparisonDto> = service
        .compare_by_names(names)
        .await?
        .into_iter()
        .map(|c| c.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(ranked)))
}
