mod cli;
mod model;
mod server;

use clap::Parser;

use crate::{
    cli::{Cli, Commands},
    server::{
        config::Config,
        error::AppError,
        ingest::{client::PlayerTotalsClient, job::IngestionJob},
        startup,
    },
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    match cli.command {
        Commands::Serve => {
            tracing::info!("Starting server");
            startup::serve(&config, db).await?;
        }
        Commands::Ingest { seasons, page_size } => {
            let seasons = (!seasons.is_empty()).then_some(seasons);
            let settings = config.ingest_settings(seasons, page_size);

            let http_client = startup::setup_reqwest_client()?;
            let client = PlayerTotalsClient::new(http_client, config.stats_api_url.clone());

            tracing::info!(
                "Ingesting seasons {:?} from {}",
                settings.seasons,
                config.stats_api_url
            );

            let report = IngestionJob::new(&db, client, settings).run().await?;

            tracing::info!(
                seasons_requested = report.seasons_requested,
                seasons_failed = report.seasons_failed,
                records_seen = report.records_seen,
                players_created = report.players_created,
                seasons_inserted = report.seasons_inserted,
                records_skipped = report.records_skipped,
                "Ingestion finished"
            );
        }
    }

    Ok(())
}
