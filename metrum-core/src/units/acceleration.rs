//! Acceleration units (`L·T⁻²`).

use crate::Dimension;

/// Dimension tag for acceleration.
#[derive(Dimension)]
#[dimension(name = "Acceleration", length = 1, time = -2)]
#[unit(
    name = "meter_per_second_squared",
    symbol = "m/s²",
    ratio = 1.0,
    si,
    plural = "meters_per_second_squared"
)]
#[unit(name = "standard_gravity", symbol = "gn", ratio = 9.806_65, plural = "standard_gravities")]
#[unit(
    name = "foot_per_second_squared",
    symbol = "ft/s²",
    ratio = 0.3048,
    plural = "feet_per_second_squared"
)]
#[unit(name = "galileo", symbol = "Gal", ratio = 1e-2)]
pub enum Acceleration {}
