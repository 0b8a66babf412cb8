//! Roster membership data repository.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::team::{RosterConflict, RosterEntry};

pub struct TeamPlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamPlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a team's membership rows joined with their players.
    ///
    /// # Returns
    /// - `Ok(Vec<(membership, player)>)` - Roster rows ordered by player id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_roster(
        &self,
        team_id: i32,
    ) -> Result<Vec<(entity::team_player::Model, entity::player::Model)>, DbErr> {
        let rows = entity::prelude::TeamPlayer::find()
            .find_also_related(entity::prelude::Player)
            .filter(entity::team_player::Column::TeamId.eq(team_id))
            .order_by_asc(entity::team_player::Column::PlayerId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(membership, player)| player.map(|p| (membership, p)))
            .collect())
    }

    /// Gets membership rows for all of the given teams.
    pub async fn find_by_team_ids(
        &self,
        team_ids: &[i32],
    ) -> Result<Vec<entity::team_player::Model>, DbErr> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TeamPlayer::find()
            .filter(entity::team_player::Column::TeamId.is_in(team_ids.iter().copied()))
            .order_by_asc(entity::team_player::Column::TeamId)
            .order_by_asc(entity::team_player::Column::PlayerId)
            .all(self.db)
            .await
    }

    /// Finds which of the given players already belong to a team.
    ///
    /// # Arguments
    /// - `player_ids` - Players requested for a roster
    /// - `exclude_team_id` - Memberships on this team are not conflicts (used on update)
    ///
    /// # Returns
    /// - `Ok(Vec<RosterConflict>)` - Players on another team, ordered by player id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_conflicts(
        &self,
        player_ids: &[i32],
        exclude_team_id: Option<i32>,
    ) -> Result<Vec<RosterConflict>, DbErr> {
        if player_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::TeamPlayer::find()
            .find_also_related(entity::prelude::Player)
            .filter(entity::team_player::Column::PlayerId.is_in(player_ids.iter().copied()));

        if let Some(team_id) = exclude_team_id {
            query = query.filter(entity::team_player::Column::TeamId.ne(team_id));
        }

        let rows = query
            .order_by_asc(entity::team_player::Column::PlayerId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(membership, player)| {
                player.map(|p| RosterConflict {
                    player_id: membership.player_id,
                    player_name: p.player_name,
                    team_id: membership.team_id,
                })
            })
            .collect())
    }

    /// Inserts a full roster for a team.
    ///
    /// # Returns
    /// - `Ok(())` - All rows inserted
    /// - `Err(DbErr)` - Database error, including a unique violation when a player is
    ///   already on another roster
    pub async fn insert_roster(&self, team_id: i32, roster: &[RosterEntry]) -> Result<(), DbErr> {
        if roster.is_empty() {
            return Ok(());
        }

        let models = roster.iter().map(|entry| entity::team_player::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            player_id: ActiveValue::Set(entry.player_id),
            position: ActiveValue::Set(entry.position.to_string()),
        });

        entity::prelude::TeamPlayer::insert_many(models)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Removes every membership row for a team.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_team(&self, team_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TeamPlayer::delete_many()
            .filter(entity::team_player::Column::TeamId.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
