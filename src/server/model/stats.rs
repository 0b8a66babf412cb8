//! Derived basketball metrics and stat aggregation.

use crate::server::model::player::PlayerSeason;

/// Assists per turnover, `None` when there were no turnovers.
pub fn calculate_atr(assists: i64, turnovers: i64) -> Option<f64> {
    if turnovers == 0 {
        return None;
    }

    Some(assists as f64 / turnovers as f64)
}

/// Points per game, `0.0` when no games were played.
pub fn calculate_ppg(points: i64, games: i64) -> f64 {
    if games == 0 {
        return 0.0;
    }

    points as f64 / games as f64
}

/// Running mean that skips absent values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Mean {
    sum: f64,
    count: u32,
}

impl Mean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn value(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }

        Some(self.sum / self.count as f64)
    }
}

/// Summed counting stats and averaged shooting percentages across season rows.
///
/// Counting stats are summed. Shooting percentages are averaged over the rows that
/// have them, so a season without a recorded percentage does not drag the mean down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatTotals {
    pub points: i64,
    pub games: i64,
    pub assists: i64,
    pub turnovers: i64,
    two_percent: Mean,
    three_percent: Mean,
}

impl StatTotals {
    pub fn from_seasons<'s>(seasons: impl IntoIterator<Item = &'s PlayerSeason>) -> Self {
        let mut totals = Self::default();
        for season in seasons {
            totals.add(season);
        }
        totals
    }

    pub fn add(&mut self, season: &PlayerSeason) {
        self.points += season.points as i64;
        self.games += season.games as i64;
        self.assists += season.assists as i64;
        self.turnovers += season.turnovers as i64;
        self.two_percent.push(season.two_percent);
        self.three_percent.push(season.three_percent);
    }

    pub fn two_percent(&self) -> Option<f64> {
        self.two_percent.value()
    }

    pub fn three_percent(&self) -> Option<f64> {
        self.three_percent.value()
    }

    pub fn atr(&self) -> Option<f64> {
        calculate_atr(self.assists, self.turnovers)
    }

    pub fn ppg(&self) -> f64 {
        calculate_ppg(self.points, self.games)
    }
}
