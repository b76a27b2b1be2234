//! Energy units (`M·L²·T⁻²`).
//!
//! Includes the thermochemical calorie (`4.184 J`), the exact electronvolt (SI 2019) and the IT British thermal unit.

use crate::Dimension;

/// Dimension tag for energy, work and heat.
#[derive(Dimension)]
#[dimension(name = "Energy", mass = 1, length = 2, time = -2)]
#[unit(name = "joule", symbol = "J", ratio = 1.0, si)]
#[unit(name = "kilojoule", symbol = "kJ", ratio = 1e3)]
#[unit(name = "megajoule", symbol = "MJ", ratio = 1e6)]
#[unit(name = "watt_hour", symbol = "Wh", ratio = 3_600.0, plural = "watt_hours")]
#[unit(name = "kilowatt_hour", symbol = "kWh", ratio = 3.6e6)]
#[unit(name = "calorie", symbol = "cal", ratio = 4.184)]
#[unit(name = "kilocalorie", symbol = "kcal", ratio = 4_184.0)]
#[unit(name = "electronvolt", symbol = "eV", ratio = 1.602_176_634e-19)]
#[unit(name = "british_thermal_unit", symbol = "BTU", ratio = 1_055.055_852_62)]
pub enum Energy {}
