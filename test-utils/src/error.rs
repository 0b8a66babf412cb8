use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or applying the schema failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
