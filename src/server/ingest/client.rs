use serde::Deserialize;

use crate::model::player::Position;

/// Public host of the player statistics API.
pub const DEFAULT_STATS_API_URL: &str = "http://b8c40s8.143.198.70.30.sslip.io";

const PLAYER_TOTALS_PATH: &str = "/api/PlayerDataTotals/query";

/// One player's season totals as returned by the statistics API.
///
/// Absent or null counting stats read as zero.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerTotalsRecord {
    pub player_name: Option<String>,
    pub position: Option<String>,
    pub season: Option<i32>,
    pub team: Option<String>,
    pub points: Option<i32>,
    pub games: Option<i32>,
    pub two_percent: Option<f64>,
    pub three_percent: Option<f64>,
    pub assists: Option<i32>,
    pub turnovers: Option<i32>,
}

impl PlayerTotalsRecord {
    /// Trimmed player name, `None` when blank.
    pub fn name(&self) -> Option<&str> {
        self.player_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    /// Roster position for the record.
    ///
    /// Hybrid listings such as `SF-PF` resolve to their first position.
    pub fn position(&self) -> Option<Position> {
        let raw = self.position.as_deref()?;
        let primary = raw.split('-').next()?;
        primary.parse().ok()
    }
}

/// HTTP client for the paginated player totals endpoint.
#[derive(Clone)]
pub struct PlayerTotalsClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlayerTotalsClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetches one page of totals for a season.
    ///
    /// # Arguments
    /// - `season` - Season year
    /// - `page_size` - Records per page
    /// - `page_number` - 1-based page index
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerTotalsRecord>)` - Records on the page, empty past the last page
    /// - `Err(reqwest::Error)` - Network failure, non-success status, or undecodable body
    pub async fn fetch_page(
        &self,
        season: i32,
        page_size: u32,
        page_number: u32,
    ) -> Result<Vec<PlayerTotalsRecord>, reqwest::Error> {
        let url = format!("{}{}", self.base_url, PLAYER_TOTALS_PATH);

        self.http
            .get(url)
            .query(&[
                ("season", season.to_string()),
                ("pageSize", page_size.to_string()),
                ("pageNumber", page_number.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<PlayerTotalsRecord>>()
            .await
    }
}
