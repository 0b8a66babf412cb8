//! Fantasy team data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::team::Team;

/// Repository providing database operations for fantasy teams.
pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new TeamRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all teams ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::TeamName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Finds a team by id.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team found
    /// - `Ok(None)` - No team with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Finds a team by exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find()
            .filter(entity::team::Column::TeamName.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Gets the teams matching any of the given ids, in no particular order.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Team>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Creates a team with no roster.
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(DbErr)` - Database error, including a unique violation on the name
    pub async fn create(&self, name: String) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            team_name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    /// Renames a team.
    ///
    /// # Returns
    /// - `Ok(Team)` - The renamed team
    /// - `Err(DbErr::RecordNotFound)` - No team with that id
    /// - `Err(DbErr)` - Other database error, including a unique violation on the name
    pub async fn rename(&self, id: i32, name: String) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            id: ActiveValue::Unchanged(id),
            team_name: ActiveValue::Set(name),
        }
        .update(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    /// Deletes a team by id.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No team with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
