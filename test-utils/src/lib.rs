//! Fantasy Hoops Test Utils
//!
//! Shared testing utilities for the fantasy hoops backend. Provides a builder for creating
//! test contexts backed by an in-memory SQLite database with the production migrations
//! applied, factories that insert rows with sensible defaults, and fixtures that build
//! entity models without touching the database.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_a_roster() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_migrations().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (team, players) = factory::helpers::create_team_with_roster(db).await?;
//!     assert_eq!(players.len(), 5);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
