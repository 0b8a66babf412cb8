use crate::{
    model::player::Position,
    server::ingest::{
        client::{PlayerTotalsClient, PlayerTotalsRecord},
        job::{IngestReport, IngestSettings, IngestionJob},
    },
};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};


const TOTALS_PATH: &str = "/api/PlayerDataTotals/query";

fn record(name: &str, position: &str, season: i32, team: &str) -> serde_json::Value {
    json!({
        "playerName": name,
        "position": position,
        "season": season,
        "team": team,
        "points": 1600,
        "games": 80,
        "twoPercent": 0.55,
        "threePercent": 0.38,
        "assists": 400,
        "turnovers": 200
    })
}

fn client_for(server: &MockServer) -> PlayerTotalsClient {
    PlayerTotalsClient::new(reqwest::Client::new(), server.uri())
}
