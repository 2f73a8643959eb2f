//! Error types for mdgen library.

use thiserror::Error;

/// Result type alias for mdgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation errors raised by the Markdown generator.
///
/// Every error describes a programming mistake in the caller's input;
/// none of them are transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A heading level was NaN or infinite.
    #[error("Heading level must be finite, got {0}")]
    NonFiniteLevel(f64),

    /// A heading level was outside `1..=max`.
    #[error("Heading level {level} is out of range (expected 1 to {max})")]
    InvalidHeaderLevel {
        /// The rejected level, as supplied
        level: f64,
        /// Largest accepted level for the heading style
        max: u8,
    },

    /// Unsupported unordered list bullet.
    #[error("Invalid list symbol '{0}' (expected one of '*', '+', '-')")]
    InvalidListSymbol(char),

    /// Unsupported horizontal rule character.
    #[error("Invalid horizontal rule symbol '{0}' (expected one of '-', '*', '_')")]
    InvalidRuleSymbol(char),

    /// Horizontal rule shorter than the Markdown minimum.
    #[error("Horizontal rule length {length} is too short (minimum is {min})")]
    RuleTooShort {
        /// Requested length
        length: usize,
        /// Minimum accepted length
        min: usize,
    },
}
