//! Text to quantity: the inverse of formatting.
//!
//! The parser splits the trailing unit symbol from the leading number, longest registered symbol first (so `mm` is
//! tried before `m`), parses the number under a [`NumberConvention`], and builds the quantity through a caller
//! supplied constructor. Text without a symbol is read in the SI unit.
//!
//! ```rust
//! use metrum_core::length::Length;
//! use metrum_core::{ParseErrorKind, Quantity};
//!
//! let d: Quantity<Length> = "12.5 km".parse().unwrap();
//! assert_eq!(d.in_meters(), 12_500.0);
//! assert_eq!(Quantity::<Length>::parse("40").unwrap().in_meters(), 40.0);
//! assert_eq!(Quantity::<Length>::parse("5 xyz").unwrap_err().kind(), ParseErrorKind::UnknownUnit);
//! ```

use crate::dimension::Dimension;
use crate::error::ParseError;
use crate::number::{Culture, NumberConvention, NumberStyles};
use crate::quantity::Quantity;
use crate::unit::Unit;
use core::str::FromStr;
use tracing::trace;

/// Parses `text` as a number followed by an optional unit symbol of `D`.
///
/// `from` builds the result from the parsed value and the resolved unit; [`Quantity::new`] is the usual choice.
///
/// # Errors
///
/// - [`ParseError::NoMatch`] when the text is blank or has no number.
/// - [`ParseError::UnknownUnit`] when a number is followed by a symbol `D` does not register.
/// - [`ParseError::InvalidNumber`] when the numeric token is not a number under `styles` and `convention`.
pub fn parse_quantity<D, Q, F, C>(text: &str, from: F, styles: NumberStyles, convention: &C) -> Result<Q, ParseError>
where
    D: Dimension,
    F: Fn(f64, Unit<D>) -> Q,
    C: NumberConvention + ?Sized,
{
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::NoMatch { text: text.to_owned() });
    }

    for (symbol, unit) in D::symbols_longest_first() {
        let Some(prefix) = trimmed.strip_suffix(symbol.as_str()) else {
            continue;
        };
        if !prefix.ends_with(|c: char| c.is_whitespace() || c.is_ascii_digit() || c == '.' || c == ',') {
            continue;
        }

        let token = prefix.trim();
        trace!(dimension = D::NAME, symbol = %symbol, token, "matched unit symbol");
        return match convention.parse_number(token, styles) {
            Some(value) => Ok(from(value, unit)),
            None => Err(ParseError::InvalidNumber { token: token.to_owned() }),
        };
    }

    if let Some((head, tail)) = trimmed.rsplit_once(char::is_whitespace) {
        if convention.parse_number(tail, styles).is_none() && convention.parse_number(head, styles).is_some() {
            trace!(dimension = D::NAME, symbol = tail, "unregistered unit symbol");
            return Err(unknown_unit::<D>(tail));
        }
    }

    if let Some(value) = convention.parse_number(trimmed, styles) {
        trace!(dimension = D::NAME, "no unit symbol, reading in SI unit");
        return Ok(from(value, D::SI));
    }

    // "m 5", "abc 5": the number is not at the front.
    if let Some((head, tail)) = trimmed.split_once(char::is_whitespace) {
        if convention.parse_number(head, styles).is_none() && convention.parse_number(tail, styles).is_some() {
            trace!(dimension = D::NAME, token = head, "text before the number");
            return Err(ParseError::NoMatch { text: text.to_owned() });
        }
    }

    // "5xyz": a number glued to an unregistered symbol.
    let boundaries = trimmed.char_indices().map(|(index, _)| index).skip(1);
    for split in boundaries.collect::<Vec<_>>().into_iter().rev() {
        let (head, tail) = trimmed.split_at(split);
        if tail.starts_with(char::is_alphabetic) && convention.parse_number(head, styles).is_some() {
            return Err(unknown_unit::<D>(tail.trim()));
        }
    }

    if trimmed.chars().any(|c| c.is_ascii_digit()) {
        Err(ParseError::InvalidNumber {
            token: trimmed.to_owned(),
        })
    } else {
        Err(ParseError::NoMatch { text: text.to_owned() })
    }
}

/// Fail-soft variant of [`parse_quantity`].
pub fn try_parse_quantity<D, Q, F, C>(text: &str, from: F, styles: NumberStyles, convention: &C) -> Option<Q>
where
    D: Dimension,
    F: Fn(f64, Unit<D>) -> Q,
    C: NumberConvention + ?Sized,
{
    parse_quantity(text, from, styles, convention).ok()
}

fn unknown_unit<D: Dimension>(symbol: &str) -> ParseError {
    ParseError::UnknownUnit {
        symbol: symbol.to_owned(),
        dimension: D::NAME,
    }
}

impl<D: Dimension> Quantity<D> {
    /// Parses with [`NumberStyles::ANY`] and the invariant culture.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_with(text, NumberStyles::ANY, &Culture::INVARIANT)
    }

    /// Parses with explicit number styles and numeral convention.
    pub fn parse_with<C: NumberConvention + ?Sized>(
        text: &str,
        styles: NumberStyles,
        convention: &C,
    ) -> Result<Self, ParseError> {
        parse_quantity(text, Quantity::new, styles, convention)
    }

    /// Like [`Quantity::parse`], returning `None` instead of an error.
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }
}

impl<D: Dimension> FromStr for Quantity<D> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
