//! Error types for fifosim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in fifosim.
///
/// The engine itself only produces [`Error::InvalidCapacity`] and
/// [`Error::EmptyIdentifier`]; the remaining variants come from the
/// script, config and CLI layers. A call that fails never mutates the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested capacity is outside the allowed range.
    #[error("Invalid capacity {requested}: must be between {min} and {max}")]
    InvalidCapacity {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// An access was requested with a blank identifier.
    #[error("Page identifier must not be empty")]
    EmptyIdentifier,

    /// A line of an access script could not be parsed.
    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },

    /// Engine configuration is inconsistent.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O error while reading a script or config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
