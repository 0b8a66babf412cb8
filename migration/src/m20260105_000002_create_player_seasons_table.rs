use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_players_table::Players;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerSeasons::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerSeasons::Id))
                    .col(integer(PlayerSeasons::PlayerId))
                    .col(integer(PlayerSeasons::Season))
                    .col(string_len(PlayerSeasons::Team, 50))
                    .col(string_len(PlayerSeasons::Position, 2))
                    .col(integer(PlayerSeasons::Points))
                    .col(integer(PlayerSeasons::Games))
                    .col(double_null(PlayerSeasons::TwoPercent))
                    .col(double_null(PlayerSeasons::ThreePercent))
                    .col(integer(PlayerSeasons::Assists))
                    .col(integer(PlayerSeasons::Turnovers))
                    .col(double_null(PlayerSeasons::Atr))
                    .col(double_null(PlayerSeasons::PpgRatio))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_seasons_player_id")
                            .from(PlayerSeasons::Table, PlayerSeasons::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_seasons_player_id_season")
                    .table(PlayerSeasons::Table)
                    .col(PlayerSeasons::PlayerId)
                    .col(PlayerSeasons::Season)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_seasons_position")
                    .table(PlayerSeasons::Table)
                    .col(PlayerSeasons::Position)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerSeasons::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerSeasons {
    Table,
    Id,
    PlayerId,
    Season,
    Team,
    Position,
    Points,
    Games,
    TwoPercent,
    ThreePercent,
    Assists,
    Turnovers,
    Atr,
    PpgRatio,
}
