//! Unit descriptors.

use crate::dimension::Dimension;
use crate::error::{QuantityError, QuantityResult};
use crate::format::{exponent_notation, SymbolStyle};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use std::borrow::Cow;

/// One named unit of the dimension `D`.
///
/// * `scale_to_si` is the conversion factor from this unit to the SI unit of the same dimension. Example: if metres
///   are the SI unit (`Length::METER.scale_to_si() == 1.0`), then kilometres use `1000.0` because `1 km = 1000 m`.
///
/// * `symbol` is the printable string (e.g. `"m"` or `"km/h"`).
///
/// * `D` ties the unit to its dimension at the type level, so a mass unit cannot be used to build a length.
///
/// # Invariants
///
/// - `scale_to_si` is finite and strictly positive; [`Unit::new`] refuses anything else.
/// - Descriptors are immutable values, normally defined once as `const`s.
pub struct Unit<D> {
    name: &'static str,
    symbol: &'static str,
    scale_to_si: f64,
    _dimension: PhantomData<fn() -> D>,
}

impl<D: Dimension> Unit<D> {
    /// Creates a unit descriptor.
    ///
    /// # Panics
    ///
    /// Panics when `scale_to_si` is not strictly positive and finite. Units are configuration, so a bad factor is
    /// fatal; when the descriptor is a `const` the panic surfaces as a compile error.
    ///
    /// ```rust
    /// use metrum_core::length::Length;
    /// use metrum_core::Unit;
    ///
    /// const FURLONG: Unit<Length> = Unit::new("furlong", "fur", 201.168);
    /// assert_eq!(FURLONG.to_si(1.0), 201.168);
    /// ```
    pub const fn new(name: &'static str, symbol: &'static str, scale_to_si: f64) -> Self {
        assert!(
            scale_to_si > 0.0 && scale_to_si.is_finite(),
            "unit scale_to_si must be positive and finite"
        );
        Self {
            name,
            symbol,
            scale_to_si,
            _dimension: PhantomData,
        }
    }

    /// Fallible variant of [`Unit::new`] for descriptors built from runtime data.
    ///
    /// ```rust
    /// use metrum_core::length::Length;
    /// use metrum_core::Unit;
    ///
    /// assert!(Unit::<Length>::try_new("void", "v", 0.0).is_err());
    /// ```
    pub fn try_new(
        name: &'static str,
        symbol: &'static str,
        scale_to_si: f64,
    ) -> QuantityResult<Self> {
        if scale_to_si > 0.0 && scale_to_si.is_finite() {
            Ok(Self::new(name, symbol, scale_to_si))
        } else {
            Err(QuantityError::InvalidUnit {
                symbol: symbol.to_owned(),
                reason: format!("scale_to_si must be positive and finite, got {scale_to_si}"),
            })
        }
    }

    /// Human readable name (`"kilometer"`).
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Canonical printable symbol (`"km"`).
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Multiply a value in this unit by this factor to get the SI magnitude.
    #[inline]
    pub const fn scale_to_si(&self) -> f64 {
        self.scale_to_si
    }

    /// Converts a value expressed in this unit to the SI magnitude.
    #[inline]
    pub const fn to_si(&self, value: f64) -> f64 {
        value * self.scale_to_si
    }

    /// Converts an SI magnitude to a value expressed in this unit. Inverse of [`Unit::to_si`].
    #[inline]
    pub const fn from_si(&self, si_value: f64) -> f64 {
        si_value / self.scale_to_si
    }

    /// True for the dimension's SI unit.
    #[inline]
    pub const fn is_si(&self) -> bool {
        self.scale_to_si == 1.0
    }

    /// The symbol in exponent notation (`"km/h"` → `"km·h⁻¹"`).
    pub fn exponent_symbol(&self) -> String {
        exponent_notation(self.symbol)
    }

    /// The symbol as rendered under `style`.
    pub fn symbol_for(&self, style: SymbolStyle) -> Cow<'static, str> {
        match style {
            SymbolStyle::Plain => Cow::Borrowed(self.symbol),
            SymbolStyle::Exponent => Cow::Owned(self.exponent_symbol()),
        }
    }
}

// No bounds on `D`: dimension markers are uninhabited enums.

impl<D> Clone for Unit<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Unit<D> {}

impl<D> PartialEq for Unit<D> {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.scale_to_si.to_bits() == other.scale_to_si.to_bits()
    }
}

impl<D> Eq for Unit<D> {}

impl<D> Hash for Unit<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
        self.scale_to_si.to_bits().hash(state);
    }
}

impl<D: Dimension> fmt::Debug for Unit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("dimension", &D::NAME)
            .field("name", &self.name)
            .field("symbol", &self.symbol)
            .field("scale_to_si", &self.scale_to_si)
            .finish()
    }
}

impl<D> fmt::Display for Unit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}
