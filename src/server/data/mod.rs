//! Database repository layer for all domain entities.
//!
//! Repositories are generic over `ConnectionTrait` so the same queries run against the
//! pool or inside a `DatabaseTransaction`. Player and team rows are converted to domain
//! models here; season rows are returned as entity models and converted by the services,
//! since that conversion can fail on bad stored data.

pub mod player;
pub mod player_season;
pub mod team;
pub mod team_player;

#[cfg(test)]
mod test;
