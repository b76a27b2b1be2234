//! Error types for argument validation and text parsing.

use thiserror::Error;

/// Result type for fallible quantity operations.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Argument and configuration errors.
///
/// These are raised immediately to the caller and are never silently clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// An argument was outside its accepted domain (non-positive tolerance, out of range superscript digit, …).
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Human readable reason.
        reason: String,
    },

    /// A unit descriptor could not be built (scale factor not positive and finite).
    #[error("invalid unit `{symbol}`: {reason}")]
    InvalidUnit {
        /// Symbol of the rejected unit.
        symbol: String,
        /// Human readable reason.
        reason: String,
    },
}

impl QuantityError {
    pub(crate) fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        QuantityError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

/// Discriminant of a [`ParseError`], for callers that only branch on the failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The text does not split into a number and a unit.
    NoMatch,
    /// The unit symbol is not registered for the dimension.
    UnknownUnit,
    /// The numeric token cannot be parsed under the requested convention.
    InvalidNumber,
}

/// Failure while turning text into a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text does not split into a number and a unit.
    #[error("`{text}` is not a number followed by a unit")]
    NoMatch {
        /// The rejected input.
        text: String,
    },

    /// The unit symbol is not registered for the dimension.
    #[error("unknown {dimension} unit `{symbol}`")]
    UnknownUnit {
        /// The unrecognized symbol.
        symbol: String,
        /// Name of the dimension that was searched.
        dimension: &'static str,
    },

    /// The numeric token cannot be parsed under the requested convention.
    #[error("`{token}` is not a valid number")]
    InvalidNumber {
        /// The numeric token that failed.
        token: String,
    },
}

impl ParseError {
    /// Returns the kind of this failure.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::NoMatch { .. } => ParseErrorKind::NoMatch,
            ParseError::UnknownUnit { .. } => ParseErrorKind::UnknownUnit,
            ParseError::InvalidNumber { .. } => ParseErrorKind::InvalidNumber,
        }
    }
}

/// Failure while reading or writing the XML representation of a quantity.
#[cfg(feature = "xml")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    /// The quantity could not be written.
    #[error("failed to write quantity XML: {0}")]
    Write(String),

    /// The XML could not be read back into a quantity.
    #[error("failed to read quantity XML: {0}")]
    Read(String),
}
