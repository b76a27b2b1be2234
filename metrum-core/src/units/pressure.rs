//! Pressure units (`M·L⁻¹·T⁻²`).

use crate::Dimension;

/// Dimension tag for pressure and stress.
#[derive(Dimension)]
#[dimension(name = "Pressure", mass = 1, length = -1, time = -2)]
#[unit(name = "pascal", symbol = "Pa", ratio = 1.0, si)]
#[unit(name = "hectopascal", symbol = "hPa", ratio = 1e2)]
#[unit(name = "kilopascal", symbol = "kPa", ratio = 1e3)]
#[unit(name = "megapascal", symbol = "MPa", ratio = 1e6)]
#[unit(name = "bar", symbol = "bar", ratio = 1e5)]
#[unit(name = "millibar", symbol = "mbar", ratio = 1e2)]
#[unit(name = "atmosphere", symbol = "atm", ratio = 101_325.0)]
#[unit(name = "psi", symbol = "psi", ratio = 6_894.757_293_168_361, plural = "psi")]
#[unit(name = "torr", symbol = "Torr", ratio = 101_325.0 / 760.0, plural = "torr")]
pub enum Pressure {}
