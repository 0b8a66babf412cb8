//! Batch ingestion of player season totals from the statistics API.
//!
//! The job is run from the `ingest` CLI subcommand. It pages through each configured
//! season and writes players and season rows through the same repositories the HTTP
//! API reads from.

pub mod client;
pub mod job;

#[cfg(test)]
mod test;
