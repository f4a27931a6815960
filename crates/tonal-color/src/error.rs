//! Error types for strict color parsing.
//!
//! The lenient conversions never fail; only the strict parsing entry
//! points surface these.

use thiserror::Error;

/// Color parsing error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input failed the 3- or 6-digit hex pattern.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Result type for strict color parsing.
pub type ColorResult<T> = Result<T, ColorError>;
