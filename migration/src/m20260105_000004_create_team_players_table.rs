use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_players_table::Players, m20260105_000003_create_teams_table::Teams,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamPlayers::Table)
                    .if_not_exists()
                    .col(integer(TeamPlayers::TeamId))
                    .col(integer(TeamPlayers::PlayerId))
                    .col(string_len(TeamPlayers::Position, 2))
                    .primary_key(
                        Index::create()
                            .col(TeamPlayers::TeamId)
                            .col(TeamPlayers::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_players_team_id")
                            .from(TeamPlayers::Table, TeamPlayers::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_players_player_id")
                            .from(TeamPlayers::Table, TeamPlayers::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A player sits on at most one roster.
        manager
            .create_index(
                Index::create()
                    .name("idx_team_players_player_id")
                    .table(TeamPlayers::Table)
                    .col(TeamPlayers::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamPlayers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamPlayers {
    Table,
    TeamId,
    PlayerId,
    Position,
}
