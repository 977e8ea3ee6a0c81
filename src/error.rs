//! Error types for the gridrace crate

use thiserror::Error;

/// Main error type for the gridrace crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("round is already over; reset the round before moving")]
    RoundOver,

    #[error("unrecognized action '{input}' (expected one of: up, down, left, right)")]
    ParseAction { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("unknown human policy '{input}'. Expected one of: {expected}")]
    ParseHumanPolicy { input: String, expected: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
