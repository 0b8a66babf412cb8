//! Team factory for creating fantasy team entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with a unique default name (`"Team {id}"`).
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Team {}", next_id()),
        }
    }

    /// Sets the team name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            team_name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}
