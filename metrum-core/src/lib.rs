//! Core type system for strongly typed, SI-normalized physical quantities.
//!
//! `metrum-core` provides a small quantity model:
//!
//! - A *dimension* is an uninhabited marker type implementing [`Dimension`] (`Length`, `Force`, …). It carries its
//!   exponent vector and a registry of named units.
//! - A *unit* is a [`Unit<D>`] value: a name, a printable symbol and a linear scale factor to the dimension's SI unit.
//! - A measured value is a [`Quantity<D>`], backed by a single `f64` that is always the SI magnitude.
//! - Cross-dimension products and quotients are declared once in the [`algebra`] table and checked against the
//!   dimension vectors when the crate is built.
//! - Text goes out through the [`format`] cache and comes back through the [`parse`] module.
//!
//! Most users should depend on `metrum` (the facade crate) unless they need direct access to these primitives.
//!
//! # Quick start
//!
//! ```rust
//! use metrum_core::{Quantity, Length, Time, Speed};
//!
//! let d = Quantity::new(1.0, Length::KILOMETER);
//! assert_eq!(d.si_value(), 1000.0);
//! assert_eq!(d.value_in(Length::MILLIMETER), 1_000_000.0);
//!
//! let v: Quantity<Speed> = d / Quantity::<Time>::from_seconds(50.0);
//! assert_eq!(v.format("F1 km/h"), "72.0 km/h");
//! ```
//!
//! # What this crate does not try to solve
//!
//! - Non-linear conversions (temperatures with offsets): every conversion is a pure scale factor.
//! - Unit inference or symbolic simplification: the dimension of a quantity is fixed by its type.
//! - Exact arithmetic: quantities are `f64` and follow IEEE-754 (division by a zero quantity yields infinity or NaN).
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `Quantity<D>` as the raw SI `f64`, plus [`serde_with_unit`].
//! - `xml` (default): [`xml::to_xml`] / [`xml::from_xml`] persistence through `quick-xml`.
//!
//! # Panics and errors
//!
//! Building a [`Unit`] with a scale factor that is not positive and finite panics; predefined units are `const`s,
//! so the panic is a compile error. Everything else reports failures through [`QuantityError`], [`ParseError`] or
//! `XmlError`, except formatting, which degrades to a placeholder instead of failing.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

pub mod algebra;
mod dimension;
mod error;
pub mod format;
pub mod number;
pub mod parse;
mod quantity;
pub mod superscript;
mod unit;
#[cfg(feature = "xml")]
pub mod xml;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

#[doc(hidden)]
pub use dimension::check_unit_table;
pub use dimension::{Dimension, DimensionVector};
pub use error::{ParseError, ParseErrorKind, QuantityError, QuantityResult};
pub use format::{FormatCache, FormatPlan, SymbolStyle};
pub use number::{Culture, NumberConvention, NumberFormat, NumberStyles};
pub use quantity::Quantity;
pub use unit::Unit;

/// Derive macro that turns a `#[dimension(..)]` + `#[unit(..)]` table into a [`Dimension`] implementation.
///
/// It expands in terms of `crate::Dimension`, `crate::Unit` and `crate::Quantity`, so it is only usable inside
/// `metrum-core`.
pub use metrum_derive::Dimension;

#[cfg(feature = "xml")]
pub use error::XmlError;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined dimensions, grouped by module.
///
/// These live in `metrum-core` so the algebra table can implement operators between them without running into Rust's
/// orphan rules.
pub mod units;

pub use algebra::{AlgebraOp, AlgebraRule, ALGEBRA_RULES};
pub use parse::{parse_quantity, try_parse_quantity};
pub use units::{DimensionInfo, DIMENSIONS};

pub use units::acceleration;
pub use units::area;
pub use units::dimensionless;
pub use units::energy;
pub use units::force;
pub use units::frequency;
pub use units::length;
pub use units::mass;
pub use units::power;
pub use units::pressure;
pub use units::speed;
pub use units::time;
pub use units::volume;

pub use units::acceleration::Acceleration;
pub use units::area::Area;
pub use units::dimensionless::Dimensionless;
pub use units::energy::Energy;
pub use units::force::Force;
pub use units::frequency::Frequency;
pub use units::length::Length;
pub use units::mass::Mass;
pub use units::power::Power;
pub use units::pressure::Pressure;
pub use units::speed::Speed;
pub use units::time::Time;
pub use units::volume::Volume;
