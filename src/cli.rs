use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fantasy-hoops")]
#[command(about = "Basketball player stats and fantasy team API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the HTTP API
    Serve,

    /// Pull player season totals from the statistics API into the database
    Ingest {
        /// Seasons to ingest, overriding INGEST_SEASONS (e.g. --season 2023 --season 2024)
        #[arg(long = "season")]
        seasons: Vec<i32>,

        /// Records requested per page, overriding INGEST_PAGE_SIZE
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        page_size: Option<u32>,
    },
}
