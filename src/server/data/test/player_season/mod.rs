use crate::{
    model::player::Position,
    server::{data::player_season::PlayerSeasonRepository, model::player::NewPlayerSeason},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_position;
mod find_by_team_name;
mod insert;

fn new_season(player_id: i32, season: i32) -> NewPlayerSeason {
    NewPlayerSeason {
        player_id,
        season,
        team: "DEN".to_string(),
        position: Position::C,
        points: 2085,
        games: 79,
        two_percent: Some(0.63),
        three_percent: Some(0.36),
        assists: 708,
        turnovers: 237,
    }
}
