//! HTTP request handlers.
//!
//! Controllers extract and validate request input, convert DTOs into domain parameters,
//! call the services, and convert the results back into DTOs. Extractor rejections are
//! taken as `Result`s so malformed input is reported through `AppError` as JSON.

pub mod player;
pub mod team;
