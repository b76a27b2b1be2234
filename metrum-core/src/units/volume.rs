//! Volume units (`L³`).
//!
//! The litre is exactly one cubic decimetre; the US liquid gallon is exactly `231 in³`.

use crate::Dimension;

/// Dimension tag for volume.
#[derive(Dimension)]
#[dimension(name = "Volume", length = 3)]
#[unit(name = "cubic_meter", symbol = "m³", ratio = 1.0, si)]
#[unit(name = "liter", symbol = "L", ratio = 1e-3)]
#[unit(name = "milliliter", symbol = "mL", ratio = 1e-6)]
#[unit(name = "cubic_centimeter", symbol = "cm³", ratio = 1e-6)]
#[unit(name = "cubic_foot", symbol = "ft³", ratio = 0.028_316_846_592, plural = "cubic_feet")]
#[unit(name = "us_gallon", symbol = "gal", ratio = 3.785_411_784e-3)]
pub enum Volume {}
