//! Error types for cadence_core

use thiserror::Error;

/// Errors raised while building core values from external input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Hex color string has a digit count other than 3, 4, 6 or 8
    #[error("invalid hex color length {len} in {input:?} (expected 3, 4, 6 or 8 digits)")]
    InvalidHexLength { input: String, len: usize },

    /// Hex color string contains a non-hex character
    #[error("invalid hex digit {digit:?} in {input:?}")]
    InvalidHexDigit { input: String, digit: char },
}

/// Result type for cadence_core operations
pub type Result<T> = std::result::Result<T, CoreError>;
