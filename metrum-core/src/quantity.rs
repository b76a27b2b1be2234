//! Quantity type and its implementations.

use crate::dimension::Dimension;
use crate::error::{QuantityError, QuantityResult};
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A measured value of dimension `D`.
///
/// `Quantity<D>` stores a single `f64`: the magnitude expressed in the SI unit of `D`, whatever unit it was built
/// from. Cross-dimension arithmetic therefore never needs to know which display unit an operand came from.
///
/// Quantities are immutable: every operation returns a new value.
///
/// # Examples
///
/// ```rust
/// use metrum_core::length::Length;
/// use metrum_core::Quantity;
///
/// let d = Quantity::new(1.0, Length::KILOMETER);
/// assert_eq!(d.si_value(), 1000.0);
/// assert_eq!(d.value_in(Length::MILLIMETER), 1_000_000.0);
///
/// let sum = d + Quantity::<Length>::from_meters(500.0);
/// assert_eq!(sum.in_kilometers(), 1.5);
/// ```
///
/// Adding different dimensions does not compile:
///
/// ```compile_fail
/// use metrum_core::{Length, Time, Quantity};
///
/// let _ = Quantity::<Length>::from_meters(1.0) + Quantity::<Time>::from_seconds(1.0);
/// ```
pub struct Quantity<D: Dimension>(f64, PhantomData<fn() -> D>);

impl<D: Dimension> Quantity<D> {
    /// The canonical zero of the dimension.
    ///
    /// ```rust
    /// use metrum_core::mass::Mass;
    /// use metrum_core::Quantity;
    /// assert_eq!(Quantity::<Mass>::ZERO.si_value(), 0.0);
    /// ```
    pub const ZERO: Self = Self::from_si_raw(0.0);

    /// A constant representing NaN for this quantity type.
    pub const NAN: Self = Self::from_si_raw(f64::NAN);

    /// Creates a quantity from a value expressed in `unit`.
    ///
    /// Never fails; the value is normalized with `unit.to_si(value)`.
    #[inline]
    pub const fn new(value: f64, unit: Unit<D>) -> Self {
        Self::from_si_raw(unit.to_si(value))
    }

    /// Builds a quantity from a magnitude that is already in SI terms.
    ///
    /// Only deserialization and the operator impls use this; everything else goes through [`Quantity::new`].
    #[inline]
    pub(crate) const fn from_si_raw(si_value: f64) -> Self {
        Self(si_value, PhantomData)
    }

    /// Returns the value expressed in `unit`.
    #[inline]
    pub const fn value_in(self, unit: Unit<D>) -> f64 {
        unit.from_si(self.0)
    }

    /// Returns the magnitude in the SI unit of the dimension.
    #[inline]
    pub const fn si_value(self) -> f64 {
        self.0
    }

    /// The unit used when none is specified (the SI unit).
    #[inline]
    pub const fn default_unit(self) -> Unit<D> {
        D::SI
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_si_raw(self.0.abs())
    }

    /// Returns the smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_si_raw(self.0.min(other.0))
    }

    /// Returns the larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_si_raw(self.0.max(other.0))
    }

    /// Multiplies the magnitude by a scalar.
    #[inline]
    pub const fn scale_by(self, factor: f64) -> Self {
        Self::from_si_raw(self.0 * factor)
    }

    /// Divides the magnitude by a scalar.
    #[inline]
    pub const fn divide_by(self, divisor: f64) -> Self {
        Self::from_si_raw(self.0 / divisor)
    }

    /// Dimensionless ratio of two quantities of the same dimension.
    ///
    /// ```rust
    /// use metrum_core::mass::Mass;
    /// use metrum_core::Quantity;
    ///
    /// let a = Quantity::<Mass>::from_kilograms(4.0);
    /// let b = Quantity::<Mass>::from_grams(2000.0);
    /// assert_eq!(a.ratio(b), 2.0);
    /// ```
    #[inline]
    pub const fn ratio(self, other: Self) -> f64 {
        self.0 / other.0
    }

    /// Compares two quantities with an explicit tolerance.
    ///
    /// Returns `|self - other| < tolerance` in SI terms. Fails with [`QuantityError::InvalidArgument`] when
    /// `tolerance` is not strictly positive.
    ///
    /// ```rust
    /// use metrum_core::length::Length;
    /// use metrum_core::Quantity;
    ///
    /// let a = Quantity::<Length>::from_meters(1.0);
    /// let b = Quantity::<Length>::from_millimeters(1000.4);
    /// let tol = Quantity::<Length>::from_millimeters(1.0);
    /// assert!(a.equals_within(b, tol).unwrap());
    /// assert!(a.equals_within(b, Quantity::ZERO).is_err());
    /// ```
    pub fn equals_within(self, other: Self, tolerance: Self) -> QuantityResult<bool> {
        if tolerance.0.is_nan() || tolerance.0 <= 0.0 {
            return Err(QuantityError::invalid_argument(
                "tolerance",
                format!(
                    "must be greater than zero, got {} {}",
                    tolerance.0,
                    D::SI.symbol()
                ),
            ));
        }
        Ok((self.0 - other.0).abs() < tolerance.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Value semantics
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Clone for Quantity<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Quantity<D> {}

impl<D: Dimension> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity<{}>({:?} {})", D::NAME, self.0, D::SI.symbol())
    }
}

impl<D: Dimension> Default for Quantity<D> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Exact equality on the SI bit pattern (`-0.0 != 0.0`, `NaN == NaN` for identical NaNs).
impl<D: Dimension> PartialEq for Quantity<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl<D: Dimension> Eq for Quantity<D> {}

impl<D: Dimension> Hash for Quantity<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// Total order by SI magnitude ([`f64::total_cmp`]), consistent with the bitwise equality.
impl<D: Dimension> Ord for Quantity<D> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl<D: Dimension> PartialOrd for Quantity<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_si_raw(self.0 + rhs.0)
    }
}

impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_si_raw(self.0 - rhs.0)
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_si_raw(-self.0)
    }
}

impl<D: Dimension> Mul<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale_by(rhs)
    }
}

impl<D: Dimension> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Self::Output {
        rhs.scale_by(self)
    }
}

impl<D: Dimension> Div<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        self.divide_by(rhs)
    }
}

/// Same-dimension division cancels to a bare scalar.
impl<D: Dimension> Div for Quantity<D> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.ratio(rhs)
    }
}

impl<D: Dimension> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, D: Dimension> Sum<&'a Quantity<D>> for Quantity<D> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension> Serialize for Quantity<D> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension> Deserialize<'de> for Quantity<D> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let si_value = f64::deserialize(deserializer)?;
        Ok(Quantity::from_si_raw(si_value))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve the unit symbol in serialized data. The value is
/// written in the SI unit; on input any registered symbol of the dimension is accepted and converted.
///
/// # Examples
///
/// ```rust
/// use metrum_core::length::Length;
/// use metrum_core::Quantity;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "metrum_core::serde_with_unit")]
///     max_distance: Quantity<Length>,  // Serializes as {"value": 100.0, "unit": "m"}
///
///     min_distance: Quantity<Length>,  // Serializes as 50.0 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<D>` as a struct with `value` and `unit` fields, in the SI unit.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "m"}
    /// ```
    pub fn serialize<D, S>(quantity: &Quantity<D>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.si_value())?;
        state.serialize_field("unit", D::SI.symbol())?;
        state.end()
    }

    /// Deserializes a `Quantity<D>` from a struct with `value` and optionally `unit` fields.
    ///
    /// A missing `unit` means the SI unit. An unregistered symbol is an error.
    pub fn deserialize<'de, D, De>(deserializer: De) -> Result<Quantity<D>, De::Error>
    where
        D: Dimension,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<D>(PhantomData<fn() -> D>);

        impl<'de, D: Dimension> Visitor<'de> for QuantityVisitor<D> {
            type Value = Quantity<D>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<D>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                let unit = match unit {
                    None => D::SI,
                    Some(symbol) => D::unit_by_symbol(&symbol).ok_or_else(|| {
                        de::Error::custom(format!("unknown {} unit '{}'", D::NAME, symbol))
                    })?,
                };

                Ok(Quantity::new(value, unit))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}
