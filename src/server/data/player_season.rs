//! Player season data repository.
//!
//! Season rows are returned as entity models. Services convert them to
//! `PlayerSeason` domain models, which parses the stored position.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{model::player::Position, server::model::player::NewPlayerSeason};

pub struct PlayerSeasonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerSeasonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a season row unless one already exists for the same player and season.
    ///
    /// The stored `atr` and `ppg_ratio` columns are filled with a snapshot computed from
    /// the row's own totals.
    ///
    /// # Arguments
    /// - `params` - Season totals for one player
    ///
    /// # Returns
    /// - `Ok((id, true))` - Row inserted with the returned id
    /// - `Ok((id, false))` - Row already existed, id of the existing row
    /// - `Err(DbErr)` - Database error during insert or lookup
    pub async fn insert(&self, params: NewPlayerSeason) -> Result<(i32, bool), DbErr> {
        let player_id = params.player_id;
        let season = params.season;
        let atr = params.atr();
        let ppg = params.ppg();

        let inserted = entity::prelude::PlayerSeason::insert(entity::player_season::ActiveModel {
            player_id: ActiveValue::Set(params.player_id),
            season: ActiveValue::Set(params.season),
            team: ActiveValue::Set(params.team),
            position: ActiveValue::Set(params.position.to_string()),
            points: ActiveValue::Set(params.points),
            games: ActiveValue::Set(params.games),
            two_percent: ActiveValue::Set(params.two_percent),
            three_percent: ActiveValue::Set(params.three_percent),
            assists: ActiveValue::Set(params.assists),
            turnovers: ActiveValue::Set(params.turnovers),
            atr: ActiveValue::Set(atr),
            ppg_ratio: ActiveValue::Set(Some(ppg)),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::player_season::Column::PlayerId,
                entity::player_season::Column::Season,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let row = entity::prelude::PlayerSeason::find()
            .filter(entity::player_season::Column::PlayerId.eq(player_id))
            .filter(entity::player_season::Column::Season.eq(season))
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Season {} for player {} after insert",
                    season, player_id
                ))
            })?;

        Ok((row.id, inserted > 0))
    }

    /// Gets season rows for a position joined with their player.
    ///
    /// # Arguments
    /// - `position` - Position stored on the season row
    /// - `season` - Restrict to one season when `Some`
    ///
    /// # Returns
    /// - `Ok(Vec<(season, player)>)` - Rows ordered by player name then season
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_position(
        &self,
        position: Position,
        season: Option<i32>,
    ) -> Result<Vec<(entity::player_season::Model, entity::player::Model)>, DbErr> {
        let mut query = entity::prelude::PlayerSeason::find()
            .find_also_related(entity::prelude::Player)
            .filter(entity::player_season::Column::Position.eq(position.as_str()));

        if let Some(season) = season {
            query = query.filter(entity::player_season::Column::Season.eq(season));
        }

        let rows = query
            .order_by_asc(entity::player::Column::PlayerName)
            .order_by_asc(entity::player_season::Column::Season)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(season, player)| player.map(|p| (season, p)))
            .collect())
    }

    /// Gets a player's most recent season row.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Row with the highest season for the player
    /// - `Ok(None)` - Player has no season rows
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_latest_for_player(
        &self,
        player_id: i32,
    ) -> Result<Option<entity::player_season::Model>, DbErr> {
        entity::prelude::PlayerSeason::find()
            .filter(entity::player_season::Column::PlayerId.eq(player_id))
            .order_by_desc(entity::player_season::Column::Season)
            .one(self.db)
            .await
    }

    /// Gets every season row belonging to any of the given players.
    pub async fn find_by_player_ids(
        &self,
        player_ids: &[i32],
    ) -> Result<Vec<entity::player_season::Model>, DbErr> {
        if player_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::PlayerSeason::find()
            .filter(entity::player_season::Column::PlayerId.is_in(player_ids.iter().copied()))
            .order_by_asc(entity::player_season::Column::PlayerId)
            .order_by_asc(entity::player_season::Column::Season)
            .all(self.db)
            .await
    }

    /// Gets every season row tagged with a real-world team abbreviation.
    pub async fn find_by_team_name(
        &self,
        team: &str,
    ) -> Result<Vec<entity::player_season::Model>, DbErr> {
        entity::prelude::PlayerSeason::find()
            .filter(entity::player_season::Column::Team.eq(team))
            .order_by_asc(entity::player_season::Column::Id)
            .all(self.db)
            .await
    }
}
