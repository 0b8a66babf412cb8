//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players.
///
/// # Example
///
/// ```rust,ignore
/// let player = PlayerFactory::new(&db).name("Nikola Jokic").build().await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with a unique default name (`"Player {id}"`).
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Player {}", next_id()),
        }
    }

    /// Sets the player name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the player entity into the database.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            player_name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}
