//! Engine error types

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during style resolution
#[derive(Debug, Error)]
pub enum Error {
    /// Core addressing error
    #[error("{0}")]
    Core(#[from] tablecraft_core::Error),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Unrecognized color theme name
    #[error("Unknown color theme: {0} (available: blue, green, orange)")]
    UnknownTheme(String),

    /// Unrecognized condition kind
    #[error("Unknown condition type: {0} (available: greater_than, less_than, equal_to, between)")]
    UnknownConditionKind(String),

    /// Unrecognized highlight color name
    #[error("Unknown highlight color: {0} (available: red, green, yellow, blue)")]
    UnknownHighlightColor(String),

    /// Unrecognized border style name
    #[error("Unknown border style: {0} (available: thin, medium, thick, double)")]
    UnknownBorderStyle(String),

    /// Unrecognized border color name
    #[error("Unknown border color: {0} (available: black, blue, red, green)")]
    UnknownBorderColor(String),

    /// Condition operand failed to parse as a number
    #[error("Invalid condition value: {0}")]
    InvalidConditionValue(String),

    /// Condition operand count does not match the condition kind
    #[error("Condition '{kind}' takes {expected} value(s), got {actual}")]
    ConditionArity {
        kind: String,
        expected: usize,
        actual: usize,
    },

    /// Table text contained no rows
    #[error("No table data provided")]
    EmptyTable,
}
