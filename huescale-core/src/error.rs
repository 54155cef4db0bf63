//! Error types for huescale-core.

use thiserror::Error;

/// Result type alias for huescale operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for huescale operations.
///
/// Normalization and interpolation are total and never produce these;
/// only lookups by name and color-string parsing can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No preset scale is registered under this name.
    #[error("unknown color scale: {0}")]
    UnknownScale(String),

    /// Text is not an `rgb(r, g, b)` color string.
    #[error("invalid color string {input:?}: {reason}")]
    InvalidColor { input: String, reason: &'static str },
}
