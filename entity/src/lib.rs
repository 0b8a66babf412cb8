//! SeaORM entity definitions for the players, seasons and fantasy team tables.

pub mod prelude;

pub mod player;
pub mod player_season;
pub mod team;
pub mod team_player;
