//! Error types for hex color parsing.

use thiserror::Error;

/// Why a string could not be decoded into an [`Rgb`](crate::math::hex::Rgb).
///
/// Only the `FromStr` path surfaces this; the plain conversion functions
/// collapse it to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexParseError {
    /// Not `#RRGGBB` or `#RGB` (with optional `#`).
    #[error("invalid hex color: {0:?}")]
    Invalid(String),

    /// Passes validation as 3-digit shorthand, but only the 6-digit form decodes.
    #[error("shorthand hex color cannot be decoded: {0:?}")]
    Shorthand(String),
}
