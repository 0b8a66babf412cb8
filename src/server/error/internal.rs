use thiserror::Error;

use crate::model::player::InvalidPosition;

/// Internal issues indicating unexpected data or possible bugs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored row holds a position code outside PG/SG/SF/PF/C.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse stored position '{value}': {source}")]
    ParseStoredPosition {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: InvalidPosition,
    },
}
