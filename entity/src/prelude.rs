pub use super::player::Entity as Player;
pub use super::player_season::Entity as PlayerSeason;
pub use super::team::Entity as Team;
pub use super::team_player::Entity as TeamPlayer;
