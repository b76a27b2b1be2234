//! Dimension types and traits.

use crate::superscript;
use crate::unit::Unit;
use core::fmt;
use core::ops::{Div, Mul};

/// Marker trait for **dimensions** (Length, Time, Mass …).
///
/// A *dimension* is the category that distinguishes a metre from a second. Each dimension is an empty enum that
/// carries its unit registry as associated constants; the [`Dimension`](metrum_derive::Dimension) derive generates
/// all of it from a small attribute table:
///
/// ```rust,ignore
/// #[derive(Dimension)]
/// #[dimension(name = "Length", length = 1)]
/// #[unit(name = "meter", symbol = "m", ratio = 1.0, si)]
/// #[unit(name = "kilometer", symbol = "km", ratio = 1e3)]
/// pub enum Length {}
/// ```
///
/// # Invariants
///
/// - `UNITS` contains `SI`, and `SI` is the only unit with `scale_to_si == 1.0`.
/// - Unit symbols are unique within the dimension.
pub trait Dimension: Sized + 'static {
    /// Display name (`"Length"`).
    const NAME: &'static str;

    /// Exponents over the seven SI base dimensions.
    const VECTOR: DimensionVector;

    /// The SI unit, used whenever no unit is specified.
    const SI: Unit<Self>;

    /// Every named unit of the dimension, in declaration order.
    const UNITS: &'static [Unit<Self>];

    /// Looks up a unit by its plain (`km/h`) or exponent-notation (`km·h⁻¹`) symbol.
    fn unit_by_symbol(symbol: &str) -> Option<Unit<Self>> {
        Self::UNITS
            .iter()
            .copied()
            .find(|unit| unit.symbol() == symbol)
            .or_else(|| {
                Self::UNITS
                    .iter()
                    .copied()
                    .find(|unit| unit.exponent_symbol() == symbol)
            })
    }

    /// Every accepted spelling of every unit, longest symbol first.
    ///
    /// Used by the parser so that `mm` is tried before `m`.
    fn symbols_longest_first() -> Vec<(String, Unit<Self>)> {
        let mut symbols: Vec<(String, Unit<Self>)> = Vec::with_capacity(Self::UNITS.len() * 2);
        for unit in Self::UNITS {
            if unit.symbol().is_empty() {
                continue;
            }
            symbols.push((unit.symbol().to_owned(), *unit));
            let exponent = unit.exponent_symbol();
            if exponent != unit.symbol() {
                symbols.push((exponent, *unit));
            }
        }
        symbols.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        symbols
    }
}

/// Validates a dimension's unit table at compile time.
///
/// Emitted by the `Dimension` derive inside a `const` item, so a violation fails the build.
///
/// # Panics
///
/// Panics when the table is empty, when `si` does not have `scale_to_si == 1.0`, when more or fewer than one unit
/// has `scale_to_si == 1.0`, or when two units share a symbol.
#[doc(hidden)]
pub const fn check_unit_table<D: Dimension>(units: &[Unit<D>], si: Unit<D>) {
    assert!(!units.is_empty(), "a dimension needs at least one unit");
    assert!(si.scale_to_si() == 1.0, "the SI unit must have scale_to_si == 1.0");

    let mut unit_scale_count = 0;
    let mut i = 0;
    while i < units.len() {
        if units[i].scale_to_si() == 1.0 {
            unit_scale_count += 1;
        }
        let mut j = i + 1;
        while j < units.len() {
            assert!(
                !bytes_eq(units[i].symbol().as_bytes(), units[j].symbol().as_bytes()),
                "duplicate unit symbol in dimension"
            );
            j += 1;
        }
        i += 1;
    }
    assert!(
        unit_scale_count == 1,
        "exactly one unit per dimension may have scale_to_si == 1.0"
    );
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Exponents of a dimension over the seven SI base dimensions.
///
/// Multiplying two quantities adds their vectors, dividing subtracts them. The algebra table uses this to verify
/// every declared rule at compile time.
///
/// - M: Mass (kilogram)
/// - L: Length (meter)
/// - T: Time (second)
/// - I: Electric current (ampere)
/// - Θ: Thermodynamic temperature (kelvin)
/// - N: Amount of substance (mole)
/// - J: Luminous intensity (candela)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DimensionVector {
    /// Mass exponent [M]
    pub mass: i8,
    /// Length exponent [L]
    pub length: i8,
    /// Time exponent [T]
    pub time: i8,
    /// Electric current exponent [I]
    pub current: i8,
    /// Temperature exponent [Θ]
    pub temperature: i8,
    /// Amount of substance exponent [N]
    pub amount: i8,
    /// Luminous intensity exponent [J]
    pub luminosity: i8,
}

impl DimensionVector {
    /// Pure number.
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    /// Creates a vector from its exponents, in `M L T I Θ N J` order.
    pub const fn new(
        mass: i8,
        length: i8,
        time: i8,
        current: i8,
        temperature: i8,
        amount: i8,
        luminosity: i8,
    ) -> Self {
        Self {
            mass,
            length,
            time,
            current,
            temperature,
            amount,
            luminosity,
        }
    }

    const fn axes(&self) -> [i8; 7] {
        [
            self.mass,
            self.length,
            self.time,
            self.current,
            self.temperature,
            self.amount,
            self.luminosity,
        ]
    }

    const fn from_axes(axes: [i8; 7]) -> Self {
        Self::new(
            axes[0], axes[1], axes[2], axes[3], axes[4], axes[5], axes[6],
        )
    }

    /// Vector of a product: `[A] × [B]`.
    #[allow(clippy::should_implement_trait)]
    pub const fn mul(self, other: Self) -> Self {
        let (a, b) = (self.axes(), other.axes());
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = a[i] + b[i];
            i += 1;
        }
        Self::from_axes(out)
    }

    /// Vector of a quotient: `[A] / [B]`.
    #[allow(clippy::should_implement_trait)]
    pub const fn div(self, other: Self) -> Self {
        self.mul(other.recip())
    }

    /// Reciprocal: `[A]⁻¹`.
    pub const fn recip(self) -> Self {
        let a = self.axes();
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = -a[i];
            i += 1;
        }
        Self::from_axes(out)
    }

    /// `const` equality, usable in compile-time assertions.
    pub const fn equals(self, other: Self) -> bool {
        let (a, b) = (self.axes(), other.axes());
        let mut i = 0;
        while i < 7 {
            if a[i] != b[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// True when every exponent is zero.
    pub const fn is_dimensionless(self) -> bool {
        self.equals(Self::DIMENSIONLESS)
    }
}

impl Mul for DimensionVector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        DimensionVector::mul(self, rhs)
    }
}

impl Div for DimensionVector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        DimensionVector::div(self, rhs)
    }
}

impl fmt::Display for DimensionVector {
    /// Exponent notation, e.g. `M·L·T⁻²`; a dimensionless vector renders as `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SYMBOLS: [&str; 7] = ["M", "L", "T", "I", "Θ", "N", "J"];

        let mut first = true;
        for (symbol, exponent) in SYMBOLS.iter().zip(self.axes()) {
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(symbol)?;
            if exponent != 1 {
                f.write_str(&superscript::format_exponent(i32::from(exponent)))?;
            }
        }
        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}
