//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Input errors are detected before any simulation state exists, so a run
/// either returns a complete [`Summary`](crate::Summary) or one of these.
#[derive(Debug, Error)]
pub enum Error {
    /// Reference sequence empty or not a sequence, or a frame count that is
    /// not a positive integer.
    #[error("{0}")]
    InvalidInput(String),

    /// Algorithm selector is not one of the recognized names.
    #[error("Unknown algorithm: {0}")]
    UnknownPolicy(String),

    /// Request could not be decoded (bad JSON, page values that are neither
    /// integers nor strings).
    ///
    /// The serde message is kept as-is.
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),

    /// The eviction policy had nothing to evict.
    ///
    /// This indicates a bug - the simulator only asks when the frame set is full.
    #[error("No resident page available for eviction")]
    NoVictim,
}

impl Error {
    /// Whether the caller supplied bad input (as opposed to an internal fault).
    ///
    /// Transports map `true` to a client error and `false` to a server error.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_) | Error::UnknownPolicy(_))
    }
}
