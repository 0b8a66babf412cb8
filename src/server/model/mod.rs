//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models in the service layer and transformed
//! to DTOs at the controller boundary. Derived metrics live in `stats` so players,
//! rosters, and comparisons compute them the same way.

pub mod player;
pub mod stats;
pub mod team;
