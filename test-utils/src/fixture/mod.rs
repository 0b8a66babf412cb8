//! Test fixtures providing entity models without database insertion.
//!
//! Unlike factories, fixtures do NOT touch the database. Use them for unit tests of
//! domain conversions and stat calculations.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let row = fixture::player_season::entity_builder()
//!     .points(1000)
//!     .games(0)
//!     .build();
//! ```

pub mod player_season;
