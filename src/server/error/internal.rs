use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A string column holds a value outside its enumerated set.
    ///
    /// Rows are only written through the typed models, so this points at manual edits or
    /// a missing migration. Results in a 500 Internal Server Error with a generic message
    /// returned to client.
    #[error("Unknown value '{value}' stored in column {column}")]
    InvalidStoredValue {
        /// Table and column the value was read from
        column: &'static str,
        /// The raw value that failed to parse
        value: String,
    },

    /// Hashing or parsing a password hash failed.
    #[error("Password hash error: {0}")]
    PasswordHash(String),
}
