//! Length units.
//!
//! The SI unit for this dimension is the metre (`Length::METER.scale_to_si() == 1.0`). All other length units are
//! expressed as exact ratios to metres:
//!
//! - **Metric ladder**: kilometre down to nanometre.
//! - **International yard and pound units**: the inch is exactly `0.0254 m`, so foot, yard and statute mile follow.
//! - **Navigation**: the nautical mile is exactly `1852 m`.
//! - **Astronomy**: the astronomical unit is exactly `149_597_870_700 m` (IAU 2012).
//!
//! ```rust
//! use metrum_core::length::Length;
//! use metrum_core::Quantity;
//!
//! let au = Quantity::<Length>::from_astronomical_units(1.0);
//! assert_eq!(au.in_kilometers(), 149_597_870.7);
//! ```

use crate::Dimension;

/// Dimension tag for length (`L`).
#[derive(Dimension)]
#[dimension(name = "Length", length = 1)]
#[unit(name = "meter", symbol = "m", ratio = 1.0, si)]
#[unit(name = "kilometer", symbol = "km", ratio = 1e3)]
#[unit(name = "centimeter", symbol = "cm", ratio = 1e-2)]
#[unit(name = "millimeter", symbol = "mm", ratio = 1e-3)]
#[unit(name = "micrometer", symbol = "µm", ratio = 1e-6)]
#[unit(name = "nanometer", symbol = "nm", ratio = 1e-9)]
#[unit(name = "inch", symbol = "in", ratio = 0.0254, plural = "inches")]
#[unit(name = "foot", symbol = "ft", ratio = 0.3048, plural = "feet")]
#[unit(name = "yard", symbol = "yd", ratio = 0.9144)]
#[unit(name = "mile", symbol = "mi", ratio = 1_609.344)]
#[unit(name = "nautical_mile", symbol = "nmi", ratio = 1_852.0)]
#[unit(name = "astronomical_unit", symbol = "au", ratio = 149_597_870_700.0)]
pub enum Length {}
