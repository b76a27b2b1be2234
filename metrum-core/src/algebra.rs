//! Dimensional algebra: which cross-dimension products and quotients exist, and what they produce.
//!
//! Every rule composes the operands' SI magnitudes directly: `Z.si_value == X.si_value op Y.si_value`. Because a
//! [`Quantity`] always stores its magnitude in SI terms, no rule ever needs to know which display unit an operand was
//! built from.
//!
//! ```rust
//! use metrum_core::{Quantity, Energy, Force, Length};
//!
//! let work: Quantity<Energy> = Quantity::<Force>::from_newtons(10.0) * Quantity::<Length>::from_meters(2.0);
//! assert_eq!(work, Quantity::<Energy>::from_joules(20.0));
//! ```
//!
//! Rules are declared in one table and each one is checked against the [`DimensionVector`]s of its operands when the
//! crate is built. [`ALGEBRA_RULES`] exposes the same table at runtime.

use crate::dimension::{Dimension, DimensionVector};
use crate::quantity::Quantity;
use crate::units::acceleration::Acceleration;
use crate::units::area::Area;
use crate::units::energy::Energy;
use crate::units::force::Force;
use crate::units::frequency::Frequency;
use crate::units::length::Length;
use crate::units::mass::Mass;
use crate::units::power::Power;
use crate::units::pressure::Pressure;
use crate::units::speed::Speed;
use crate::units::time::Time;
use crate::units::volume::Volume;
use crate::units::DIMENSIONS;
use core::fmt;
use core::ops::{Div, Mul};

/// Binary operator of an algebra rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgebraOp {
    /// `X * Y`
    Mul,
    /// `X / Y`
    Div,
}

impl AlgebraOp {
    /// The operator's token (`*` or `/`).
    pub const fn symbol(self) -> &'static str {
        match self {
            AlgebraOp::Mul => "*",
            AlgebraOp::Div => "/",
        }
    }
}

impl fmt::Display for AlgebraOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One declared rule `lhs op rhs => output`.
#[derive(Clone, Copy)]
pub struct AlgebraRule {
    /// Name of the left operand's dimension.
    pub lhs: &'static str,
    /// The operator.
    pub op: AlgebraOp,
    /// Name of the right operand's dimension.
    pub rhs: &'static str,
    /// Name of the result dimension, or `"scalar"` when the dimensions cancel.
    pub output: &'static str,
    /// Exponent vector of the left operand.
    pub lhs_vector: DimensionVector,
    /// Exponent vector of the right operand.
    pub rhs_vector: DimensionVector,
    /// Exponent vector of the result.
    pub output_vector: DimensionVector,
    /// Applies the typed operator to two SI magnitudes and returns the SI magnitude of the result.
    pub apply: fn(f64, f64) -> f64,
}

impl AlgebraRule {
    /// Runs the rule on two SI magnitudes.
    #[inline]
    pub fn evaluate(&self, lhs_si: f64, rhs_si: f64) -> f64 {
        (self.apply)(lhs_si, rhs_si)
    }

    /// True when the result is a bare scalar.
    pub fn is_scalar(&self) -> bool {
        self.output_vector.is_dimensionless() && self.output == "scalar"
    }
}

impl fmt::Debug for AlgebraRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgebraRule")
            .field("lhs", &self.lhs)
            .field("op", &self.op)
            .field("rhs", &self.rhs)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for AlgebraRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} => {}", self.lhs, self.op, self.rhs, self.output)
    }
}

algebra_table! {
    // Geometry
    Length * Length => Area;
    Area * Length => Volume;
    Length * Area => Volume;
    Area / Length => Length;
    Volume / Area => Length;
    Volume / Length => Area;

    // Kinematics
    Length / Time => Speed;
    Speed * Time => Length;
    Time * Speed => Length;
    Length / Speed => Time;
    Speed / Time => Acceleration;
    Acceleration * Time => Speed;
    Speed / Acceleration => Time;

    // Dynamics
    Mass * Acceleration => Force;
    Acceleration * Mass => Force;
    Force / Mass => Acceleration;
    Force / Acceleration => Mass;

    // Work and power
    Force * Length => Energy;
    Length * Force => Energy;
    Energy / Length => Force;
    Energy / Force => Length;
    Energy / Time => Power;
    Power * Time => Energy;
    Time * Power => Energy;
    Energy / Power => Time;
    Force * Speed => Power;
    Speed * Force => Power;
    Power / Speed => Force;
    Power / Force => Speed;

    // Pressure
    Force / Area => Pressure;
    Pressure * Area => Force;
    Area * Pressure => Force;
    Force / Pressure => Area;
    Pressure * Volume => Energy;
    Volume * Pressure => Energy;
    Energy / Volume => Pressure;
    Energy / Pressure => Volume;

    // Rates
    Frequency * Time => scalar;
    Time * Frequency => scalar;
    Speed / Length => Frequency;
    Frequency * Length => Speed;
    Length * Frequency => Speed;
    Speed / Frequency => Length;
    Frequency * Speed => Acceleration;
    Speed * Frequency => Acceleration;
    Acceleration / Frequency => Speed;
    Acceleration / Speed => Frequency;
}

/// Exponent vector of `lhs op rhs`, whether or not a rule is declared for it.
///
/// ```rust
/// use metrum_core::algebra::{derive_vector, AlgebraOp};
/// use metrum_core::{Dimension, Length, Time, Speed};
///
/// assert_eq!(derive_vector(Length::VECTOR, AlgebraOp::Div, Time::VECTOR), Speed::VECTOR);
/// ```
pub const fn derive_vector(
    lhs: DimensionVector,
    op: AlgebraOp,
    rhs: DimensionVector,
) -> DimensionVector {
    match op {
        AlgebraOp::Mul => lhs.mul(rhs),
        AlgebraOp::Div => lhs.div(rhs),
    }
}

/// Finds the declared rule for `lhs op rhs`, by dimension name.
///
/// Same-dimension division is implicit and has no entry.
pub fn rule_for(lhs: &str, op: AlgebraOp, rhs: &str) -> Option<&'static AlgebraRule> {
    ALGEBRA_RULES
        .iter()
        .find(|rule| rule.lhs == lhs && rule.op == op && rule.rhs == rhs)
}

/// Names a dimension vector after the predefined dimension that carries it.
///
/// Returns `None` for vectors no predefined dimension uses (e.g. `L³·T⁻¹`).
pub fn dimension_name_for(vector: DimensionVector) -> Option<&'static str> {
    DIMENSIONS
        .iter()
        .find(|info| info.vector == vector)
        .map(|info| info.name)
}
