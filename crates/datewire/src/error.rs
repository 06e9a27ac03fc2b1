//! Error types for datewire operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatewireError {
    /// The input string does not have the shape required for the requested
    /// target type. The message always names the offending input.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A caller supplied an observer zone that is not the zone this parser
    /// was configured with. Deriving a calendar date from an instant is only
    /// correct in the zone of the human looking at the screen, so any other
    /// zone is refused outright.
    #[error(
        "Observer zone mismatch: this parser derives calendar dates in '{expected}', \
         but '{given}' was supplied. Pass '{expected}' instead of '{given}'"
    )]
    ObserverZoneMismatch { expected: String, given: String },

    /// An operation that is deliberately absent from this role's capability
    /// set. The message carries the rationale and the recommended path.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// A construction parameter was used outside the context it is allowed
    /// in, or the host environment could not be read at construction time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A zone name that does not resolve against the timezone database.
    #[error("Invalid timezone: {0}")]
    InvalidZone(String),

    /// A parse failure reported by chrono once the shape gate has passed,
    /// forwarded with chrono's own diagnostic intact.
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, DatewireError>;
