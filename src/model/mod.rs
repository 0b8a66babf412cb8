//! Request and response DTOs shared by the HTTP API.

pub mod api;
pub mod player;
pub mod team;
