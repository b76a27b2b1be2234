//! Strongly typed, SI-normalized physical quantities.
//!
//! `metrum` is the user-facing crate in this workspace. It re-exports the full API from `metrum-core`: the
//! [`Quantity`] type, the predefined dimensions and their units, the dimensional algebra, the format cache, the
//! parser and XML persistence.
//!
//! A value is always a `Quantity<D>`, where `D` is an uninhabited marker type describing a *dimension* (`Length`,
//! `Force`, …). The quantity stores its SI magnitude; units only matter when a value enters or leaves the program.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Makes every cross-dimension product explicit: `Force * Length` is `Energy` because a rule says so, and the rule
//!   is checked against the dimension exponents when the crate is built.
//! - Round-trips values through text and XML without losing precision.
//!
//! # What this crate does not try to solve
//!
//! - Affine conversions (°C ↔ K) or logarithmic units.
//! - Open-ended symbolic algebra: products that no rule names do not compile.
//! - Exact arithmetic: quantities are backed by `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use metrum::{Quantity, Length, Time, Speed, Force, Energy};
//!
//! let d = Quantity::new(1.0, Length::KILOMETER);
//! assert_eq!(d.in_meters(), 1000.0);
//!
//! let v: Quantity<Speed> = d / Quantity::<Time>::from_minutes(1.0);
//! assert_eq!(v.format("F2 km/h"), "60.00 km/h");
//!
//! let w: Quantity<Energy> = Quantity::<Force>::from_newtons(10.0) * Quantity::<Length>::from_meters(2.0);
//! assert_eq!(w.to_string(), "20 J");
//!
//! let parsed: Quantity<Length> = "12.5 mi".parse().unwrap();
//! assert!(parsed > d);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use metrum::{Quantity, Length, Time};
//!
//! let d = Quantity::<Length>::from_meters(1.0);
//! let t = Quantity::<Time>::from_seconds(1.0);
//! let _ = d + t; // cannot add different dimensions
//! ```
//!
//! # Modules
//!
//! Dimensions are grouped under modules (also re-exported at the crate root):
//!
//! - `metrum::length`, `metrum::area`, `metrum::volume`
//! - `metrum::mass`, `metrum::time`, `metrum::frequency`
//! - `metrum::speed`, `metrum::acceleration`, `metrum::force`
//! - `metrum::energy`, `metrum::power`, `metrum::pressure`
//! - `metrum::dimensionless` (ratio, percent, permille, ppm)
//!
//! # Feature flags
//!
//! - `xml` (default): XML persistence through [`xml`].
//! - `serde`: `Serialize`/`Deserialize` for `Quantity<D>`; the default representation is the raw SI `f64`, and
//!   [`serde_with_unit`] writes `{"value": .., "unit": ".."}`.
//!
//! ```toml
//! [dependencies]
//! metrum = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Arithmetic and conversions never panic; they follow IEEE-754. Invalid arguments surface as [`QuantityError`],
//! malformed text as [`ParseError`], and XML failures as `XmlError`. Formatting never fails: a format string naming
//! an unknown unit renders [`format::FALLBACK_TEXT`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use metrum_core::*;

