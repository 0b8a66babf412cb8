//! Business logic layer.
//!
//! Services validate input, orchestrate repository calls, and convert entity rows into
//! domain models. Multi-statement writes run inside a single transaction; dropping an
//! uncommitted transaction rolls it back when an error propagates.

pub mod player;
pub mod team;
