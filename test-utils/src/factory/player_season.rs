//! Player season factory for creating per-season stat rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test player season rows.
///
/// Defaults describe an unremarkable 2024 point guard season: 820 points over 41 games,
/// 200 assists against 100 turnovers, 50% from two and 35% from three.
///
/// # Example
///
/// ```rust,ignore
/// let season = PlayerSeasonFactory::new(&db, player.id)
///     .season(2023)
///     .position("C")
///     .team("DEN")
///     .build()
///     .await?;
/// ```
pub struct PlayerSeasonFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: i32,
    season: i32,
    team: String,
    position: String,
    points: i32,
    games: i32,
    two_percent: Option<f64>,
    three_percent: Option<f64>,
    assists: i32,
    turnovers: i32,
}

impl<'a> PlayerSeasonFactory<'a> {
    /// Creates a new PlayerSeasonFactory for the given player with default stats.
    pub fn new(db: &'a DatabaseConnection, player_id: i32) -> Self {
        Self {
            db,
            player_id,
            season: 2024,
            team: "LAL".to_string(),
            position: "PG".to_string(),
            points: 820,
            games: 41,
            two_percent: Some(0.5),
            three_percent: Some(0.35),
            assists: 200,
            turnovers: 100,
        }
    }

    /// Sets the season year.
    pub fn season(mut self, season: i32) -> Self {
        self.season = season;
        self
    }

    /// Sets the real team abbreviation the season was played for.
    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    /// Sets the position code.
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets total points.
    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    /// Sets games played.
    pub fn games(mut self, games: i32) -> Self {
        self.games = games;
        self
    }

    /// Sets the two and three point percentages.
    pub fn shooting(mut self, two_percent: Option<f64>, three_percent: Option<f64>) -> Self {
        self.two_percent = two_percent;
        self.three_percent = three_percent;
        self
    }

    /// Sets total assists.
    pub fn assists(mut self, assists: i32) -> Self {
        self.assists = assists;
        self
    }

    /// Sets total turnovers.
    pub fn turnovers(mut self, turnovers: i32) -> Self {
        self.turnovers = turnovers;
        self
    }

    /// Builds and inserts the season row into the database.
    pub async fn build(self) -> Result<entity::player_season::Model, DbErr> {
        entity::player_season::ActiveModel {
            player_id: ActiveValue::Set(self.player_id),
            season: ActiveValue::Set(self.season),
            team: ActiveValue::Set(self.team),
            position: ActiveValue::Set(self.position),
            points: ActiveValue::Set(self.points),
            games: ActiveValue::Set(self.games),
            two_percent: ActiveValue::Set(self.two_percent),
            three_percent: ActiveValue::Set(self.three_percent),
            assists: ActiveValue::Set(self.assists),
            turnovers: ActiveValue::Set(self.turnovers),
            atr: ActiveValue::Set(None),
            ppg_ratio: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default season row for the player at the given position.
pub async fn create_player_season(
    db: &DatabaseConnection,
    player_id: i32,
    position: &str,
) -> Result<entity::player_season::Model, DbErr> {
    PlayerSeasonFactory::new(db, player_id)
        .position(position)
        .build()
        .await
}
