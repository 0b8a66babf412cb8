//! Player season fixtures.

/// Creates a default player season entity model (not inserted).
///
/// Matches the defaults of `PlayerSeasonFactory`.
pub fn entity() -> entity::player_season::Model {
    entity_builder().build()
}

/// Creates a builder for customizing a player season entity model.
pub fn entity_builder() -> PlayerSeasonEntityBuilder {
    PlayerSeasonEntityBuilder {
        model: entity::player_season::Model {
            id: 1,
            player_id: 1,
            season: 2024,
            team: "LAL".to_string(),
            position: "PG".to_string(),
            points: 820,
            games: 41,
            two_percent: Some(0.5),
            three_percent: Some(0.35),
            assists: 200,
            turnovers: 100,
            atr: None,
            ppg_ratio: None,
        },
    }
}

/// Builder for player season entity models.
pub struct PlayerSeasonEntityBuilder {
    model: entity::player_season::Model,
}

impl PlayerSeasonEntityBuilder {
    pub fn player_id(mut self, player_id: i32) -> Self {
        self.model.player_id = player_id;
        self
    }

    pub fn season(mut self, season: i32) -> Self {
        self.model.season = season;
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.model.position = position.into();
        self
    }

    pub fn points(mut self, points: i32) -> Self {
        self.model.points = points;
        self
    }

    pub fn games(mut self, games: i32) -> Self {
        self.model.games = games;
        self
    }

    pub fn shooting(mut self, two_percent: Option<f64>, three_percent: Option<f64>) -> Self {
        self.model.two_percent = two_percent;
        self.model.three_percent = three_percent;
        self
    }

    pub fn assists(mut self, assists: i32) -> Self {
        self.model.assists = assists;
        self
    }

    pub fn turnovers(mut self, turnovers: i32) -> Self {
        self.model.turnovers = turnovers;
        self
    }

    pub fn build(self) -> entity::player_season::Model {
        self.model
    }
}
