//! Unicode superscript glyphs used by exponent-notation unit symbols (`m·s⁻²`).

use crate::error::{QuantityError, QuantityResult};

/// Superscript minus sign (`⁻`).
pub const MINUS: char = '\u{207B}';

/// Superscript plus sign (`⁺`).
pub const PLUS: char = '\u{207A}';

const DIGITS: [char; 10] = [
    '\u{2070}', '\u{00B9}', '\u{00B2}', '\u{00B3}', '\u{2074}', '\u{2075}', '\u{2076}', '\u{2077}',
    '\u{2078}', '\u{2079}',
];

/// Returns the superscript glyph for `digit`.
///
/// Fails with [`QuantityError::InvalidArgument`] unless `0 <= digit <= 9`.
///
/// ```rust
/// use metrum_core::superscript;
/// assert_eq!(superscript::get_char(2).unwrap(), '²');
/// assert!(superscript::get_char(10).is_err());
/// ```
pub fn get_char(digit: i32) -> QuantityResult<char> {
    usize::try_from(digit)
        .ok()
        .and_then(|index| DIGITS.get(index).copied())
        .ok_or_else(|| {
            QuantityError::invalid_argument("digit", format!("{digit} is not in 0..=9"))
        })
}

/// Returns the digit represented by a superscript glyph; the inverse of [`get_char`].
///
/// ```rust
/// use metrum_core::superscript;
/// assert_eq!(superscript::get_digit('³').unwrap(), 3);
/// assert!(superscript::get_digit('3').is_err());
/// ```
pub fn get_digit(glyph: char) -> QuantityResult<u8> {
    DIGITS
        .iter()
        .position(|&d| d == glyph)
        .map(|index| index as u8)
        .ok_or_else(|| {
            QuantityError::invalid_argument("glyph", format!("`{glyph}` is not a superscript digit"))
        })
}

/// Renders an integer exponent with superscript glyphs (`-2` → `⁻²`).
pub fn format_exponent(exponent: i32) -> String {
    let mut out = String::new();
    if exponent < 0 {
        out.push(MINUS);
    }
    for digit in exponent.unsigned_abs().to_string().bytes() {
        out.push(DIGITS[usize::from(digit - b'0')]);
    }
    out
}

/// Splits a unit factor into its base symbol and integer exponent.
///
/// Recognizes trailing superscripts (`s⁻²`) and caret notation (`s^-2`); a factor without an exponent has
/// exponent `1`. An exponent that does not fit in an `i32` is not recognized either.
///
/// ```rust
/// use metrum_core::superscript::split_exponent;
/// assert_eq!(split_exponent("s⁻²"), ("s", -2));
/// assert_eq!(split_exponent("m^3"), ("m", 3));
/// assert_eq!(split_exponent("km"), ("km", 1));
/// ```
pub fn split_exponent(factor: &str) -> (&str, i32) {
    if let Some((base, exponent)) = factor.rsplit_once('^') {
        if let Ok(exponent) = exponent.trim().parse::<i32>() {
            return (base, exponent);
        }
    }

    let mut magnitude = Some(0i32);
    let mut scale = Some(1i32);
    let mut split_at = factor.len();
    for (index, glyph) in factor.char_indices().rev() {
        match get_digit(glyph) {
            Ok(digit) => {
                magnitude = match (magnitude, scale) {
                    (Some(m), Some(s)) => i32::from(digit).checked_mul(s).and_then(|d| m.checked_add(d)),
                    (Some(m), None) if digit == 0 => Some(m),
                    _ => None,
                };
                scale = scale.and_then(|s| s.checked_mul(10));
                split_at = index;
            }
            Err(_) => break,
        }
    }

    let Some(magnitude) = magnitude.filter(|_| split_at != factor.len()) else {
        return (factor, 1);
    };

    let head = &factor[..split_at];
    if let Some(base) = head.strip_suffix(MINUS) {
        (base, -magnitude)
    } else if let Some(base) = head.strip_suffix(PLUS) {
        (base, magnitude)
    } else {
        (head, magnitude)
    }
}
