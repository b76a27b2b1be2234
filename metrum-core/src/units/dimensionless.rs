//! Dimensionless ratios that carry a display unit.
//!
//! Algebra rules whose dimensions cancel return a bare `f64`; wrap it in `Quantity<Dimensionless>` when it should
//! render as a percentage or parts per million.

use crate::Dimension;

/// Dimension tag for pure numbers.
#[derive(Dimension)]
#[dimension(name = "Dimensionless")]
#[unit(name = "ratio", symbol = "", ratio = 1.0, si, plural = "ratio")]
#[unit(name = "percent", symbol = "%", ratio = 1e-2, plural = "percent")]
#[unit(name = "permille", symbol = "‰", ratio = 1e-3, plural = "permille")]
#[unit(name = "part_per_million", symbol = "ppm", ratio = 1e-6, plural = "parts_per_million")]
pub enum Dimensionless {}
