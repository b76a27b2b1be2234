//! Mass units.
//!
//! The kilogram is the SI unit, so `Mass::GRAM` has a ratio of `1e-3`. The avoirdupois pound is exactly
//! `0.453_592_37 kg` and the ounce is a sixteenth of it.

use crate::Dimension;

/// Dimension tag for mass (`M`).
#[derive(Dimension)]
#[dimension(name = "Mass", mass = 1)]
#[unit(name = "kilogram", symbol = "kg", ratio = 1.0, si)]
#[unit(name = "gram", symbol = "g", ratio = 1e-3)]
#[unit(name = "milligram", symbol = "mg", ratio = 1e-6)]
#[unit(name = "microgram", symbol = "µg", ratio = 1e-9)]
#[unit(name = "tonne", symbol = "t", ratio = 1e3)]
#[unit(name = "pound", symbol = "lb", ratio = 0.453_592_37)]
#[unit(name = "ounce", symbol = "oz", ratio = 0.453_592_37 / 16.0)]
pub enum Mass {}
