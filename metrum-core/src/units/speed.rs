//! Speed units (`L·T⁻¹`).
//!
//! ```rust
//! use metrum_core::{Quantity, Length, Time, Speed};
//!
//! let v: Quantity<Speed> = Quantity::<Length>::from_kilometers(90.0) / Quantity::<Time>::from_hours(1.0);
//! assert!((v.in_meters_per_second() - 25.0).abs() < 1e-12);
//! ```

use crate::Dimension;

/// Dimension tag for speed.
#[derive(Dimension)]
#[dimension(name = "Speed", length = 1, time = -1)]
#[unit(name = "meter_per_second", symbol = "m/s", ratio = 1.0, si, plural = "meters_per_second")]
#[unit(
    name = "kilometer_per_hour",
    symbol = "km/h",
    ratio = 1_000.0 / 3_600.0,
    plural = "kilometers_per_hour"
)]
#[unit(name = "mile_per_hour", symbol = "mph", ratio = 0.447_04, plural = "miles_per_hour")]
#[unit(name = "knot", symbol = "kn", ratio = 1_852.0 / 3_600.0)]
#[unit(name = "foot_per_second", symbol = "ft/s", ratio = 0.3048, plural = "feet_per_second")]
pub enum Speed {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::Length;
    use crate::units::time::Time;
    use crate::Quantity;
    use approx::assert_relative_eq;

    #[test]
    fn kmh_to_mps() {
        let v = Quantity::<Speed>::from_kilometers_per_hour(36.0);
        assert_relative_eq!(v.in_meters_per_second(), 10.0, max_relative = 1e-12);
    }

    #[test]
    fn knot_is_one_nautical_mile_per_hour() {
        let v = Quantity::<Length>::from_nautical_miles(1.0) / Quantity::<Time>::from_hours(1.0);
        assert_relative_eq!(v.in_knots(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn distance_from_speed_and_time() {
        let d: Quantity<Length> =
            Quantity::<Speed>::from_miles_per_hour(60.0) * Quantity::<Time>::from_minutes(30.0);
        assert_relative_eq!(d.in_miles(), 30.0, max_relative = 1e-12);
    }

    #[test]
    fn exponent_spelling_resolves() {
        assert_eq!(Speed::unit_by_symbol("km·h⁻¹"), Some(Speed::KILOMETER_PER_HOUR));
        assert_eq!(Speed::unit_by_symbol("m·s⁻¹"), Some(Speed::METER_PER_SECOND));
    }
}
