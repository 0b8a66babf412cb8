//! Factory methods for creating test data.
//!
//! Each factory inserts rows with sensible defaults and returns the created entity model.
//! Use the `*Factory` builders to customize fields, or the `create_*` shorthands when the
//! defaults are enough.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let player = factory::player::PlayerFactory::new(&db)
//!     .name("Stephen Curry")
//!     .build()
//!     .await?;
//!
//! let season = factory::player_season::PlayerSeasonFactory::new(&db, player.id)
//!     .season(2024)
//!     .position("PG")
//!     .points(1956)
//!     .games(74)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `player` - Create player entities
//! - `player_season` - Create season stat rows for a player
//! - `team` - Create fantasy team entities
//! - `team_player` - Attach players to a team roster
//! - `helpers` - Convenience methods for creating complete rosters

pub mod helpers;
pub mod player;
pub mod player_season;
pub mod team;
pub mod team_player;

pub use player::create_player;
pub use player_season::create_player_season;
pub use team::create_team;
pub use team_player::add_team_player;
