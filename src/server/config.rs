use std::str::FromStr;

use crate::server::{
    error::{config::ConfigError, AppError},
    ingest::{client::DEFAULT_STATS_API_URL, job::IngestSettings},
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_INGEST_SEASONS: [i32; 3] = [2022, 2023, 2024];
const DEFAULT_INGEST_PAGE_SIZE: u32 = 100;
const DEFAULT_INGEST_MAX_PAGES: u32 = 50;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub stats_api_url: String,
    pub ingest_seasons: Vec<i32>,
    pub ingest_page_size: u32,
    pub ingest_max_pages: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` is not set
    /// - `Err(AppError::ConfigErr(InvalidValue))` - A numeric variable failed to parse
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let ingest_seasons = match lookup("INGEST_SEASONS") {
            Some(value) => parse_seasons(&value).ok_or_else(|| ConfigError::InvalidValue {
                name: "INGEST_SEASONS".to_string(),
                value,
            })?,
            None => DEFAULT_INGEST_SEASONS.to_vec(),
        };

        Ok(Self {
            database_url,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            stats_api_url: lookup("STATS_API_URL")
                .unwrap_or_else(|| DEFAULT_STATS_API_URL.to_string()),
            ingest_seasons,
            ingest_page_size: parse_positive(
                "INGEST_PAGE_SIZE",
                lookup("INGEST_PAGE_SIZE"),
                DEFAULT_INGEST_PAGE_SIZE,
            )?,
            ingest_max_pages: parse_positive(
                "INGEST_MAX_PAGES",
                lookup("INGEST_MAX_PAGES"),
                DEFAULT_INGEST_MAX_PAGES,
            )?,
        })
    }

    /// Ingestion settings from configuration, with CLI overrides applied.
    pub fn ingest_settings(
        &self,
        seasons: Option<Vec<i32>>,
        page_size: Option<u32>,
    ) -> IngestSettings {
        IngestSettings {
            seasons: seasons.unwrap_or_else(|| self.ingest_seasons.clone()),
            page_size: page_size.unwrap_or(self.ingest_page_size),
            max_pages: self.ingest_max_pages,
        }
    }
}

/// Parses a comma separated season list such as `2022, 2023,2024`.
///
/// Returns `None` when any entry is not a year or the list is empty.
pub fn parse_seasons(value: &str) -> Option<Vec<i32>> {
    let seasons = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(i32::from_str)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    if seasons.is_empty() {
        return None;
    }

    Some(seasons)
}

fn parse_positive(name: &str, value: Option<String>, default: u32) -> Result<u32, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
    }
}
