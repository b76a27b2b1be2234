//! Force units (`M·L·T⁻²`).

use crate::Dimension;

/// Dimension tag for force.
#[derive(Dimension)]
#[dimension(name = "Force", mass = 1, length = 1, time = -2)]
#[unit(name = "newton", symbol = "N", ratio = 1.0, si)]
#[unit(name = "kilonewton", symbol = "kN", ratio = 1e3)]
#[unit(name = "meganewton", symbol = "MN", ratio = 1e6)]
#[unit(name = "dyne", symbol = "dyn", ratio = 1e-5)]
#[unit(name = "pound_force", symbol = "lbf", ratio = 4.448_221_615_260_5, plural = "pounds_force")]
#[unit(name = "kilogram_force", symbol = "kgf", ratio = 9.806_65, plural = "kilograms_force")]
pub enum Force {}
