//! Power units (`M·L²·T⁻³`).

use crate::Dimension;

/// Dimension tag for power.
#[derive(Dimension)]
#[dimension(name = "Power", mass = 1, length = 2, time = -3)]
#[unit(name = "watt", symbol = "W", ratio = 1.0, si)]
#[unit(name = "milliwatt", symbol = "mW", ratio = 1e-3)]
#[unit(name = "kilowatt", symbol = "kW", ratio = 1e3)]
#[unit(name = "megawatt", symbol = "MW", ratio = 1e6)]
#[unit(name = "gigawatt", symbol = "GW", ratio = 1e9)]
#[unit(name = "horsepower", symbol = "hp", ratio = 745.699_871_582_270_2, plural = "horsepower")]
pub enum Power {}
