//! Predefined dimensions and their named units.
//!
//! `metrum-core` ships these dimensions so that the algebra table, formatting and parsing work out of the box without
//! downstream crates having to fight Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`length`]: metre (SI) plus metric, imperial, nautical and astronomical lengths.
//! - [`area`]: square metre (SI), hectare, acre.
//! - [`volume`]: cubic metre (SI), litre, US gallon.
//! - [`mass`]: kilogram (SI), tonne, avoirdupois pound and ounce.
//! - [`time`]: second (SI) up to the Julian year.
//! - [`speed`]: metre per second (SI), km/h, mph, knot.
//! - [`acceleration`]: m/s² (SI), standard gravity.
//! - [`force`]: newton (SI), pound-force, kilogram-force.
//! - [`energy`]: joule (SI), watt-hour, calorie, electronvolt, BTU.
//! - [`power`]: watt (SI), horsepower.
//! - [`pressure`]: pascal (SI), bar, atmosphere, psi, torr.
//! - [`frequency`]: hertz (SI), rpm, and period conversions.
//! - [`dimensionless`]: plain ratios, percent, permille, ppm.

use crate::dimension::{Dimension, DimensionVector};

pub mod acceleration;
pub mod area;
pub mod dimensionless;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod speed;
pub mod time;
pub mod volume;

/// Type-erased summary of one predefined dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionInfo {
    /// Display name (`"Speed"`).
    pub name: &'static str,
    /// Exponents over the SI base dimensions.
    pub vector: DimensionVector,
    /// Symbol of the SI unit (`"m/s"`).
    pub si_symbol: &'static str,
    /// Number of registered units.
    pub unit_count: usize,
}

impl DimensionInfo {
    /// Summary of `D`.
    pub const fn of<D: Dimension>() -> Self {
        Self {
            name: D::NAME,
            vector: D::VECTOR,
            si_symbol: D::SI.symbol(),
            unit_count: D::UNITS.len(),
        }
    }
}

/// Every predefined dimension.
pub const DIMENSIONS: &[DimensionInfo] = &[
    DimensionInfo::of::<length::Length>(),
    DimensionInfo::of::<area::Area>(),
    DimensionInfo::of::<volume::Volume>(),
    DimensionInfo::of::<mass::Mass>(),
    DimensionInfo::of::<time::Time>(),
    DimensionInfo::of::<speed::Speed>(),
    DimensionInfo::of::<acceleration::Acceleration>(),
    DimensionInfo::of::<force::Force>(),
    DimensionInfo::of::<energy::Energy>(),
    DimensionInfo::of::<power::Power>(),
    DimensionInfo::of::<pressure::Pressure>(),
    DimensionInfo::of::<frequency::Frequency>(),
    DimensionInfo::of::<dimensionless::Dimensionless>(),
];
