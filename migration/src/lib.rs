pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_players_table;
mod m20260105_000002_create_player_seasons_table;
mod m20260105_000003_create_teams_table;
mod m20260105_000004_create_team_players_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_players_table::Migration),
            Box::new(m20260105_000002_create_player_seasons_table::Migration),
            Box::new(m20260105_000003_create_teams_table::Migration),
            Box::new(m20260105_000004_create_team_players_table::Migration),
        ]
    }
}
