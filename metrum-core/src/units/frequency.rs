//! Frequency units (`T⁻¹`) and period conversions.
//!
//! ```rust
//! use metrum_core::{Quantity, Frequency, Time};
//!
//! let f = Quantity::<Frequency>::from_period(Quantity::<Time>::from_milliseconds(20.0));
//! assert!((f.in_hertz() - 50.0).abs() < 1e-9);
//! ```

use crate::units::time::Time;
use crate::{Dimension, Quantity};

/// Dimension tag for frequency.
#[derive(Dimension)]
#[dimension(name = "Frequency", time = -1)]
#[unit(name = "hertz", symbol = "Hz", ratio = 1.0, si, plural = "hertz")]
#[unit(name = "millihertz", symbol = "mHz", ratio = 1e-3, plural = "millihertz")]
#[unit(name = "kilohertz", symbol = "kHz", ratio = 1e3, plural = "kilohertz")]
#[unit(name = "megahertz", symbol = "MHz", ratio = 1e6, plural = "megahertz")]
#[unit(name = "gigahertz", symbol = "GHz", ratio = 1e9, plural = "gigahertz")]
#[unit(
    name = "revolution_per_minute",
    symbol = "rpm",
    ratio = 1.0 / 60.0,
    plural = "revolutions_per_minute"
)]
pub enum Frequency {}

impl Quantity<Frequency> {
    /// Frequency of a cycle lasting `period`.
    #[inline]
    pub fn from_period(period: Quantity<Time>) -> Self {
        Self::from_si_raw(1.0 / period.si_value())
    }

    /// Duration of one cycle.
    #[inline]
    pub fn period(self) -> Quantity<Time> {
        Quantity::from_si_raw(1.0 / self.si_value())
    }
}
