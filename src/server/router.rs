use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ConflictErrorDto, ErrorDto, MessageDto},
        player::{PlayerStatsDto, Position},
        team::{
            CreateTeamDto, RosterConflictDto, TeamComparisonDto, TeamCreatedDto, TeamDetailDto,
            TeamPlayerStatsDto, TeamSummaryDto, UpdateTeamDto,
        },
    },
    server::{
        controller::{
            player::{self, get_players},
            team::{
                self, compare_teams, compare_teams_by_name, create_team, delete_team, get_team,
                get_teams, update_team,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Fantasy Hoops API"),
    paths(
        player::get_players,
        team::get_teams,
        team::create_team,
        team::get_team,
        team::update_team,
        team::delete_team,
        team::compare_teams,
        team::compare_teams_by_name,
    ),
    components(schemas(
        ErrorDto,
        ConflictErrorDto,
        MessageDto,
        Position,
        PlayerStatsDto,
        CreateTeamDto,
        UpdateTeamDto,
        TeamCreatedDto,
        TeamSummaryDto,
        TeamPlayerStatsDto,
        TeamDetailDto,
        TeamComparisonDto,
        RosterConflictDto,
    )),
    tags(
        (name = "player", description = "Player season statistics"),
        (name = "team", description = "Fantasy team management and comparison"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/players", get(get_players))
        .route("/api/teams", get(get_teams).post(create_team))
        .route("/api/teams/compare", get(compare_teams))
        .route("/api/teams/stats", get(compare_teams_by_name))
        .route(
            "/api/teams/{team_id}",
            get(get_team).put(update_team).delete(delete_team),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
