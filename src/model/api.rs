use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::team::RosterConflictDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Error body returned when requested players already sit on another roster.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ConflictErrorDto {
    pub error: String,
    pub conflicts: Vec<RosterConflictDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
