//! Numeral formatting and parsing conventions.
//!
//! Quantities never format or parse numbers themselves; they go through a [`NumberConvention`]. [`Culture`] is the
//! built-in implementation, parameterized by its decimal and group separators, and [`Culture::INVARIANT`] is the
//! convention used whenever none is given.
//!
//! Numeric sub-formats follow the usual single-letter tokens:
//!
//! | token  | meaning                                   | `1234.5678` (invariant) |
//! |--------|-------------------------------------------|-------------------------|
//! | `G`    | shortest round-trip text                  | `1234.5678`             |
//! | `G3`   | three significant digits                  | `1.23E+03`              |
//! | `R`    | round trip (same as `G`)                  | `1234.5678`             |
//! | `F2`   | fixed point, two decimals (default 2)     | `1234.57`               |
//! | `N1`   | fixed point with group separators         | `1,234.6`               |
//! | `E3`   | scientific, three decimals (default 6)    | `1.235E+003`            |

use crate::error::QuantityError;
use core::fmt;
use core::str::FromStr;

/// The seam to a culture-specific numeral collaborator.
pub trait NumberConvention {
    /// Renders `value` under `format`.
    fn format_number(&self, value: f64, format: &NumberFormat) -> String;

    /// Parses `text` under `styles`, or returns `None` when it is not a number in this convention.
    fn parse_number(&self, text: &str, styles: NumberStyles) -> Option<f64>;
}

/// Decimal and group separators of a numeral convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Culture {
    /// Separator between the integer and fractional digits.
    pub decimal_separator: char,
    /// Separator between groups of three integer digits.
    pub group_separator: char,
}

impl Culture {
    /// Culture-independent convention: `1,234.5`.
    pub const INVARIANT: Culture = Culture::new('.', ',');

    /// Creates a convention from its separators (`Culture::new(',', '.')` for `1.234,5`).
    pub const fn new(decimal_separator: char, group_separator: char) -> Self {
        Self {
            decimal_separator,
            group_separator,
        }
    }

    fn localize(&self, invariant: &str) -> String {
        if *self == Self::INVARIANT {
            return invariant.to_owned();
        }
        invariant
            .chars()
            .map(|c| match c {
                '.' => self.decimal_separator,
                ',' => self.group_separator,
                other => other,
            })
            .collect()
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::INVARIANT
    }
}

impl NumberConvention for Culture {
    fn format_number(&self, value: f64, format: &NumberFormat) -> String {
        if value.is_nan() {
            return "NaN".to_owned();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
        }

        let invariant = match *format {
            NumberFormat::General(None) | NumberFormat::General(Some(0)) | NumberFormat::RoundTrip => {
                shortest(value)
            }
            NumberFormat::General(Some(precision)) => significant(value, precision),
            NumberFormat::Fixed(decimals) => format!("{:.*}", usize::from(decimals), value),
            NumberFormat::Number(decimals) => group_thousands(&format!("{:.*}", usize::from(decimals), value)),
            NumberFormat::Scientific(decimals) => {
                let (mantissa, exponent) = split_scientific(format!("{:.*e}", usize::from(decimals), value));
                with_exponent(&mantissa, exponent, 3)
            }
        };
        self.localize(&invariant)
    }

    fn parse_number(&self, text: &str, styles: NumberStyles) -> Option<f64> {
        let text = if styles.allow_whitespace { text.trim() } else { text };
        if text.is_empty() {
            return None;
        }
        if let Some(special) = parse_special(text, styles) {
            return Some(special);
        }

        let mut normalized = String::with_capacity(text.len());
        let mut seen_digit = false;
        let mut seen_decimal = false;
        let mut seen_exponent = false;

        for (index, c) in text.char_indices() {
            match c {
                '0'..='9' => {
                    normalized.push(c);
                    seen_digit = true;
                }
                c if c == self.decimal_separator
                    && styles.allow_decimal_point
                    && !seen_decimal
                    && !seen_exponent =>
                {
                    normalized.push('.');
                    seen_decimal = true;
                }
                c if c == self.group_separator
                    && styles.allow_thousands
                    && seen_digit
                    && !seen_decimal
                    && !seen_exponent => {}
                'e' | 'E' if styles.allow_exponent && seen_digit && !seen_exponent => {
                    normalized.push('e');
                    seen_exponent = true;
                }
                '+' | '-' if (index == 0 && styles.allow_leading_sign) || normalized.ends_with('e') => {
                    normalized.push(c);
                }
                _ => return None,
            }
        }

        if !seen_digit {
            return None;
        }
        normalized.parse::<f64>().ok()
    }
}

/// A numeric sub-format token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    /// `G[n]`: shortest round-trip text, or `n` significant digits.
    General(Option<u8>),
    /// `R`: shortest text that parses back to the same `f64`.
    RoundTrip,
    /// `F[n]`: fixed point with `n` decimals.
    Fixed(u8),
    /// `N[n]`: fixed point with `n` decimals and group separators.
    Number(u8),
    /// `E[n]`: scientific with `n` mantissa decimals.
    Scientific(u8),
}

impl NumberFormat {
    /// Largest accepted precision.
    pub const MAX_PRECISION: u8 = 99;
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::General(None)
    }
}

impl FromStr for NumberFormat {
    type Err = QuantityError;

    /// Parses a token such as `F2`, `e3` or `G`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let mut chars = token.chars();
        let letter = chars
            .next()
            .ok_or_else(|| QuantityError::invalid_argument("value_format", "empty numeric format"))?;
        let digits = chars.as_str();

        let precision = if digits.is_empty() {
            None
        } else {
            match digits.parse::<u8>() {
                Ok(p) if p <= Self::MAX_PRECISION && digits.bytes().all(|b| b.is_ascii_digit()) => Some(p),
                _ => {
                    return Err(QuantityError::invalid_argument(
                        "value_format",
                        format!("`{token}` has an invalid precision (expected 0..=99)"),
                    ))
                }
            }
        };

        match (letter.to_ascii_uppercase(), precision) {
            ('G', p) => Ok(NumberFormat::General(p)),
            ('R', None) => Ok(NumberFormat::RoundTrip),
            ('F', p) => Ok(NumberFormat::Fixed(p.unwrap_or(2))),
            ('N', p) => Ok(NumberFormat::Number(p.unwrap_or(2))),
            ('E', p) => Ok(NumberFormat::Scientific(p.unwrap_or(6))),
            _ => Err(QuantityError::invalid_argument(
                "value_format",
                format!("`{token}` is not a numeric format"),
            )),
        }
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberFormat::General(None) => f.write_str("G"),
            NumberFormat::General(Some(p)) => write!(f, "G{p}"),
            NumberFormat::RoundTrip => f.write_str("R"),
            NumberFormat::Fixed(p) => write!(f, "F{p}"),
            NumberFormat::Number(p) => write!(f, "N{p}"),
            NumberFormat::Scientific(p) => write!(f, "E{p}"),
        }
    }
}

/// Which constructs a numeric token may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberStyles {
    /// Leading and trailing whitespace is ignored.
    pub allow_whitespace: bool,
    /// A leading `+` or `-`.
    pub allow_leading_sign: bool,
    /// A decimal separator.
    pub allow_decimal_point: bool,
    /// Group separators in the integer part.
    pub allow_thousands: bool,
    /// An `e`/`E` exponent.
    pub allow_exponent: bool,
}

impl NumberStyles {
    /// Signed integers.
    pub const INTEGER: NumberStyles = NumberStyles {
        allow_whitespace: true,
        allow_leading_sign: true,
        allow_decimal_point: false,
        allow_thousands: false,
        allow_exponent: false,
    };

    /// Signed decimals with an optional exponent, no group separators.
    pub const FLOAT: NumberStyles = NumberStyles {
        allow_decimal_point: true,
        allow_exponent: true,
        ..Self::INTEGER
    };

    /// Everything, including group separators.
    pub const ANY: NumberStyles = NumberStyles {
        allow_thousands: true,
        ..Self::FLOAT
    };
}

impl Default for NumberStyles {
    fn default() -> Self {
        Self::ANY
    }
}

fn parse_special(text: &str, styles: NumberStyles) -> Option<f64> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) if styles.allow_leading_sign => (true, rest),
        Some(_) => return None,
        None => (false, text.strip_prefix('+').filter(|_| styles.allow_leading_sign).unwrap_or(text)),
    };

    let magnitude = if body.eq_ignore_ascii_case("nan") {
        f64::NAN
    } else if body.eq_ignore_ascii_case("infinity") || body.eq_ignore_ascii_case("inf") || body == "∞" {
        f64::INFINITY
    } else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Shortest round-trip text, switching to scientific notation for very large or very small magnitudes.
fn shortest(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e15).contains(&magnitude) {
        let (mantissa, exponent) = split_scientific(format!("{value:e}"));
        with_exponent(&mantissa, exponent, 2)
    } else {
        format!("{value}")
    }
}

fn significant(value: f64, precision: u8) -> String {
    let digits = i32::from(precision);
    let (mantissa, exponent) = split_scientific(format!("{:.*e}", usize::from(precision) - 1, value));
    if exponent < -5 || exponent >= digits {
        with_exponent(trim_fraction(&mantissa), exponent, 2)
    } else {
        let decimals = usize::try_from(digits - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn split_scientific(text: String) -> (String, i32) {
    match text.split_once('e') {
        Some((mantissa, exponent)) => (mantissa.to_owned(), exponent.parse().unwrap_or(0)),
        None => (text, 0),
    }
}

fn with_exponent(mantissa: &str, exponent: i32, min_digits: usize) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}E{sign}{:0min_digits$}", exponent.unsigned_abs())
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

fn group_thousands(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3);
    out.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
