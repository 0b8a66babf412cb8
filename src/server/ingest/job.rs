use sea_orm::DatabaseConnection;

use crate::server::{
    data::{player::PlayerRepository, player_season::PlayerSeasonRepository},
    error::AppError,
    ingest::client::{PlayerTotalsClient, PlayerTotalsRecord},
    model::player::NewPlayerSeason,
};

/// Which seasons to ingest and how to page through them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSettings {
    pub seasons: Vec<i32>,
    pub page_size: u32,
    /// Upper bound on pages fetched per season.
    pub max_pages: u32,
}

/// Counters describing one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub seasons_requested: usize,
    pub seasons_failed: usize,
    pub records_seen: usize,
    pub players_created: usize,
    pub seasons_inserted: usize,
    pub records_skipped: usize,
}

/// Pulls player totals for each configured season and stores them.
///
/// Player and season inserts are idempotent, so re-running the job over the same data
/// adds nothing. A season whose fetch fails is logged and counted, and the job moves on
/// to the next one. Database errors abort the run.
pub struct IngestionJob<'a> {
    db: &'a DatabaseConnection,
    client: PlayerTotalsClient,
    settings: IngestSettings,
}

impl<'a> IngestionJob<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        client: PlayerTotalsClient,
        settings: IngestSettings,
    ) -> Self {
        Self {
            db,
            client,
            settings,
        }
    }

    /// Runs the job over every configured season.
    ///
    /// # Returns
    /// - `Ok(IngestReport)` - Counters for the run, including failed seasons
    /// - `Err(AppError::DbErr)` - A write failed
    pub async fn run(&self) -> Result<IngestReport, AppError> {
        let mut report = IngestReport {
            seasons_requested: self.settings.seasons.len(),
            ..Default::default()
        };

        for &season in &self.settings.seasons {
            tracing::info!("Ingesting season {}", season);
            self.ingest_season(season, &mut report).await?;
        }

        Ok(report)
    }

    async fn ingest_season(&self, season: i32, report: &mut IngestReport) -> Result<(), AppError> {
        for page in 1..=self.settings.max_pages {
            let records = match self
                .client
                .fetch_page(season, self.settings.page_size, page)
                .await
            {
                Ok(records) => records,
                Err(err) => {
                    tracing::warn!(
                        "Failed to fetch season {} page {}, skipping season: {}",
                        season,
                        page,
                        err
                    );
                    report.seasons_failed += 1;
                    return Ok(());
                }
            };

            let fetched = records.len();
            tracing::debug!("Season {} page {}: {} records", season, page, fetched);

            for record in records {
                report.records_seen += 1;
                self.store_record(season, record, report).await?;
            }

            if fetched < self.settings.page_size as usize {
                break;
            }
        }

        Ok(())
    }

    async fn store_record(
        &self,
        season: i32,
        record: PlayerTotalsRecord,
        report: &mut IngestReport,
    ) -> Result<(), AppError> {
        let Some(name) = record.name() else {
            tracing::warn!("Skipping season {} record without a player name", season);
            report.records_skipped += 1;
            return Ok(());
        };

        let Some(position) = record.position() else {
            tracing::warn!(
                "Skipping {} in season {}: unknown position {:?}",
                name,
                season,
                record.position
            );
            report.records_skipped += 1;
            return Ok(());
        };

        let (player, created) = PlayerRepository::new(self.db).find_or_create(name).await?;
        if created {
            report.players_created += 1;
        }

        let (_, inserted) = PlayerSeasonRepository::new(self.db)
            .insert(NewPlayerSeason {
                player_id: player.id,
                season: record.season.unwrap_or(season),
                team: record.team.unwrap_or_default(),
                position,
                points: record.points.unwrap_or(0),
                games: record.games.unwrap_or(0),
                two_percent: record.two_percent,
                three_percent: record.three_percent,
                assists: record.assists.unwrap_or(0),
                turnovers: record.turnovers.unwrap_or(0),
            })
            .await?;
        if inserted {
            report.seasons_inserted += 1;
        }

        Ok(())
    }
}
