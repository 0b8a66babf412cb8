use std::collections::HashMap;

use crate::{
    model::player::Position,
    server::error::{internal::InternalError, AppError},
};

/// Parses a position code read back from the database.
///
/// # Arguments
/// - `value` - The stored position string
///
/// # Returns
/// - `Ok(Position)` - Successfully parsed position
/// - `Err(AppError::InternalErr(ParseStoredPosition))` - The stored value is not a
///   known position code
pub fn parse_position_from_string(value: String) -> Result<Position, AppError> {
    let result = value
        .parse::<Position>()
        .map_err(|e| InternalError::ParseStoredPosition { value, source: e })?;

    Ok(result)
}

/// Parses a team id supplied by a client in a query string.
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - The value is not an integer
pub fn parse_team_id(value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid team ID '{}'", value)))
}

/// Collects query parameters named `{prefix}N` ordered by `N`.
///
/// Keys whose suffix is not a number are ignored, so `team1`, `team2`, `team10` come
/// back in numeric order while `teams` or `team_x` are skipped.
pub fn numbered_query_values(params: &HashMap<String, String>, prefix: &str) -> Vec<String> {
    let mut numbered: Vec<(u32, &String)> = params
        .iter()
        .filter_map(|(key, value)| {
            let n = key.strip_prefix(prefix)?.parse::<u32>().ok()?;
            Some((n, value))
        })
        .collect();

    numbered.sort_by_key(|(n, _)| *n);

    numbered.into_iter().map(|(_, v)| v.clone()).collect()
}
