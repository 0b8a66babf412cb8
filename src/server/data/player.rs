//! Player data repository.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::player::Player;

/// Repository providing database operations for players.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `PlayerRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a player by exact name.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found
    /// - `Ok(None)` - No player has that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find()
            .filter(entity::player::Column::PlayerName.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Looks a player up by name, inserting them when absent.
    ///
    /// The insert ignores name conflicts, so concurrent or repeated calls for the same
    /// name all resolve to one row.
    ///
    /// # Arguments
    /// - `name` - Player name as reported by the statistics API
    ///
    /// # Returns
    /// - `Ok((Player, true))` - Player was inserted by this call
    /// - `Ok((Player, false))` - Player already existed
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn find_or_create(&self, name: &str) -> Result<(Player, bool), DbErr> {
        if let Some(player) = self.find_by_name(name).await? {
            return Ok((player, false));
        }

        let inserted = entity::prelude::Player::insert(entity::player::ActiveModel {
            player_name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::player::Column::PlayerName)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let player = self
            .find_by_name(name)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Player '{}' after insert", name)))?;

        Ok((player, inserted > 0))
    }
}
