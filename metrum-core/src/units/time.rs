//! Time units.
//!
//! The second is the SI unit. Calendar-like units here are fixed-length: a day is exactly `86_400 s` and the
//! Julian year is exactly `365.25 d`.

use crate::Dimension;

/// Dimension tag for time (`T`).
#[derive(Dimension)]
#[dimension(name = "Time", time = 1)]
#[unit(name = "second", symbol = "s", ratio = 1.0, si)]
#[unit(name = "millisecond", symbol = "ms", ratio = 1e-3)]
#[unit(name = "microsecond", symbol = "µs", ratio = 1e-6)]
#[unit(name = "nanosecond", symbol = "ns", ratio = 1e-9)]
#[unit(name = "minute", symbol = "min", ratio = 60.0)]
#[unit(name = "hour", symbol = "h", ratio = 3_600.0)]
#[unit(name = "day", symbol = "d", ratio = 86_400.0)]
#[unit(name = "week", symbol = "wk", ratio = 604_800.0)]
#[unit(name = "julian_year", symbol = "a", ratio = 31_557_600.0)]
pub enum Time {}
