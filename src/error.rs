//! Error types for color parsing and picker configuration.

use thiserror::Error;

/// Errors that can occur when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The string (without its leading `#`) has more than 8 digits.
    #[error("unsupported hex color length {0}, expected at most 8 digits")]
    UnsupportedLength(usize),

    /// A character that is not a hexadecimal digit.
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Character offset of the digit, after the leading `#`.
        position: usize,
    },
}

/// Errors that can occur when loading a picker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid TOML or does not match the schema.
    #[error("failed to parse picker config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The settings parsed but contradict each other or are out of range.
    #[error("invalid picker config: {0}")]
    Invalid(String),
}
