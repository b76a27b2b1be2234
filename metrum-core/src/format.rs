//! Text rendering of quantities and the format cache.
//!
//! A composite format string such as `"F2 km/h"` is split into a numeric sub-format (`F2`) and a unit symbol
//! (`km/h`). Resolving that pair into a [`FormatPlan`] is memoized in a [`FormatCache`], so formatting many
//! quantities with the same format only parses the format once.
//!
//! ```rust
//! use metrum_core::speed::Speed;
//! use metrum_core::{Quantity, SymbolStyle};
//!
//! let v = Quantity::<Speed>::from_meters_per_second(10.0);
//! assert_eq!(v.format("F1 km/h"), "36.0 km/h");
//! assert_eq!(v.format_with(Some("F1"), Speed::KILOMETER_PER_HOUR, SymbolStyle::Exponent), "36.0 km·h⁻¹");
//! ```
//!
//! Formatting never fails: a malformed numeric sub-format or an unknown unit symbol renders the placeholder
//! [`FALLBACK_TEXT`] and logs a warning.

use crate::dimension::Dimension;
use crate::number::{Culture, NumberConvention, NumberFormat};
use crate::quantity::Quantity;
use crate::superscript::{format_exponent, split_exponent};
use crate::unit::Unit;
use core::any::TypeId;
use core::fmt;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Rendered in place of a quantity whose format cannot be resolved.
pub const FALLBACK_TEXT: &str = "{value: ??} {unit: ??}";

static GLOBAL_CACHE: OnceCell<FormatCache> = OnceCell::new();

/// How compound unit symbols are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymbolStyle {
    /// The registered symbol as written (`m/s²`).
    #[default]
    Plain,
    /// Factors joined by `·` with superscript exponents (`m·s⁻²`).
    Exponent,
}

/// Rewrites a unit symbol in exponent notation.
///
/// Factors are separated by `·` or `*`; everything after a `/` is a denominator and has its exponent negated.
///
/// ```rust
/// use metrum_core::format::exponent_notation;
///
/// assert_eq!(exponent_notation("km/h"), "km·h⁻¹");
/// assert_eq!(exponent_notation("m/s²"), "m·s⁻²");
/// assert_eq!(exponent_notation("N*m"), "N·m");
/// assert_eq!(exponent_notation("m²"), "m²");
/// ```
pub fn exponent_notation(symbol: &str) -> String {
    let mut groups = symbol.split('/');
    let mut factors: Vec<String> = Vec::new();
    if let Some(numerator) = groups.next() {
        push_factors(&mut factors, numerator, 1);
    }
    for denominator in groups {
        push_factors(&mut factors, denominator, -1);
    }

    if factors.is_empty() {
        symbol.to_owned()
    } else {
        factors.join("·")
    }
}

fn push_factors(out: &mut Vec<String>, group: &str, sign: i32) {
    for factor in group.split(|c: char| c == '·' || c == '*') {
        let factor = factor.trim();
        if factor.is_empty() || factor == "1" {
            continue;
        }
        let (base, exponent) = split_exponent(factor);
        let Some(exponent) = exponent.checked_mul(sign) else {
            out.push(factor.to_owned());
            continue;
        };
        if exponent == 1 {
            out.push(base.to_owned());
        } else {
            out.push(format!("{base}{}", format_exponent(exponent)));
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plans
// ─────────────────────────────────────────────────────────────────────────────

/// A resolved, immutable rendering recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatPlan {
    kind: PlanKind,
}

#[derive(Debug, Clone, PartialEq)]
enum PlanKind {
    Render {
        number: NumberFormat,
        scale_to_si: f64,
        symbol: String,
    },
    Fallback,
}

impl FormatPlan {
    fn fallback() -> Self {
        Self {
            kind: PlanKind::Fallback,
        }
    }

    fn build(key: &FormatKey) -> Self {
        let number = match &key.value_format {
            ValueFormat::Default => NumberFormat::default(),
            ValueFormat::Parsed(number) => *number,
            ValueFormat::Invalid(_) => return Self::fallback(),
        };
        let symbol = match key.style {
            SymbolStyle::Plain => key.unit.symbol.to_owned(),
            SymbolStyle::Exponent => exponent_notation(key.unit.symbol),
        };
        Self {
            kind: PlanKind::Render {
                number,
                scale_to_si: f64::from_bits(key.unit.scale_bits),
                symbol,
            },
        }
    }

    /// Renders an SI magnitude: the number in the plan's unit, a space, then the symbol.
    ///
    /// A unit with an empty symbol renders the number alone.
    pub fn render<C: NumberConvention + ?Sized>(&self, si_value: f64, convention: &C) -> String {
        match &self.kind {
            PlanKind::Render {
                number,
                scale_to_si,
                symbol,
            } => {
                let text = convention.format_number(si_value / scale_to_si, number);
                if symbol.is_empty() {
                    text
                } else {
                    format!("{text} {symbol}")
                }
            }
            PlanKind::Fallback => FALLBACK_TEXT.to_owned(),
        }
    }

    /// True for the placeholder plan of a malformed format.
    pub fn is_fallback(&self) -> bool {
        matches!(self.kind, PlanKind::Fallback)
    }

    /// The numeric sub-format, unless this is the placeholder plan.
    pub fn number_format(&self) -> Option<NumberFormat> {
        match &self.kind {
            PlanKind::Render { number, .. } => Some(*number),
            PlanKind::Fallback => None,
        }
    }

    /// The rendered unit symbol, unless this is the placeholder plan.
    pub fn symbol(&self) -> Option<&str> {
        match &self.kind {
            PlanKind::Render { symbol, .. } => Some(symbol),
            PlanKind::Fallback => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cache keys
// ─────────────────────────────────────────────────────────────────────────────

/// Numeric sub-format normalized by value: `"f"`, `" F2 "` and `"F2"` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ValueFormat {
    Default,
    Parsed(NumberFormat),
    Invalid(String),
}

impl ValueFormat {
    fn new(value_format: Option<&str>) -> Self {
        match value_format.map(str::trim) {
            None | Some("") => ValueFormat::Default,
            Some(token) => match token.parse::<NumberFormat>() {
                Ok(number) => ValueFormat::Parsed(number),
                Err(_) => ValueFormat::Invalid(token.to_owned()),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct UnitKey {
    dimension: TypeId,
    symbol: &'static str,
    scale_bits: u64,
}

impl UnitKey {
    fn of<D: Dimension>(unit: Unit<D>) -> Self {
        Self {
            dimension: TypeId::of::<D>(),
            symbol: unit.symbol(),
            scale_bits: unit.scale_to_si().to_bits(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FormatKey {
    value_format: ValueFormat,
    unit: UnitKey,
    style: SymbolStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CompositeKey {
    dimension: TypeId,
    spec: String,
    style: SymbolStyle,
}

// ─────────────────────────────────────────────────────────────────────────────
// Cache
// ─────────────────────────────────────────────────────────────────────────────

/// Memoizes [`FormatPlan`]s by `(value format, unit, symbol style)`.
///
/// Plans are created at most once per key and kept for the lifetime of the cache. Composite format strings are
/// resolved to the same key as the equivalent structured request, so both call shapes share one plan.
///
/// [`FormatCache::global`] is the process-wide instance used by [`Quantity::format`] and `Display`; tests and
/// embedders can create independent instances with [`FormatCache::new`].
#[derive(Debug, Default)]
pub struct FormatCache {
    plans: RwLock<HashMap<FormatKey, Arc<FormatPlan>>>,
    composites: RwLock<HashMap<CompositeKey, Arc<FormatPlan>>>,
}

impl FormatCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lazily created process-wide cache.
    pub fn global() -> &'static FormatCache {
        GLOBAL_CACHE.get_or_init(FormatCache::new)
    }

    /// Number of distinct plans.
    pub fn len(&self) -> usize {
        self.plans.read().len()
    }

    /// True when no plan has been created yet.
    pub fn is_empty(&self) -> bool {
        self.plans.read().is_empty()
    }

    /// Returns the plan for a structured request, creating it on first use.
    ///
    /// `value_format` is a numeric sub-format token such as `"F2"`; `None` or blank means the default.
    pub fn get_or_create<D: Dimension>(
        &self,
        value_format: Option<&str>,
        unit: Unit<D>,
        style: SymbolStyle,
    ) -> Arc<FormatPlan> {
        let key = FormatKey {
            value_format: ValueFormat::new(value_format),
            unit: UnitKey::of(unit),
            style,
        };

        // Malformed formats are caller text; placeholders are not memoized.
        if let ValueFormat::Invalid(token) = &key.value_format {
            warn!(dimension = D::NAME, format = %token, "unparseable numeric format, rendering placeholder");
            return Arc::new(FormatPlan::fallback());
        }

        if let Some(plan) = self.plans.read().get(&key) {
            return Arc::clone(plan);
        }

        let mut plans = self.plans.write();
        let plan = plans.entry(key).or_insert_with_key(|key| {
            debug!(
                dimension = D::NAME,
                unit = key.unit.symbol,
                style = ?key.style,
                "format cache miss"
            );
            Arc::new(FormatPlan::build(key))
        });
        Arc::clone(plan)
    }

    /// Returns the plan for a composite format string such as `"F2 km/h"`.
    ///
    /// - `""` renders with the default numeric format in the SI unit.
    /// - `"F2 km/h"` uses the numeric format before the first whitespace and the unit whose symbol (plain or
    ///   exponent spelling) follows it.
    /// - A single token is a unit symbol when one matches, otherwise a numeric format in the SI unit.
    ///
    /// An unknown unit symbol or malformed numeric format yields the placeholder plan, which is not cached.
    pub fn get_or_create_composite<D: Dimension>(&self, spec: &str, style: SymbolStyle) -> Arc<FormatPlan> {
        let key = CompositeKey {
            dimension: TypeId::of::<D>(),
            spec: spec.trim().to_owned(),
            style,
        };

        if let Some(plan) = self.composites.read().get(&key) {
            return Arc::clone(plan);
        }

        let plan = match resolve_composite::<D>(&key.spec) {
            Some((value_format, unit)) => {
                debug!(dimension = D::NAME, spec = %key.spec, unit = unit.symbol(), "resolved composite format");
                self.get_or_create(value_format, unit, style)
            }
            None => {
                warn!(dimension = D::NAME, spec = %key.spec, "unknown unit in format, rendering placeholder");
                Arc::new(FormatPlan::fallback())
            }
        };
        if plan.is_fallback() {
            return plan;
        }

        let mut composites = self.composites.write();
        Arc::clone(composites.entry(key).or_insert(plan))
    }
}

fn resolve_composite<D: Dimension>(spec: &str) -> Option<(Option<&str>, Unit<D>)> {
    if spec.is_empty() {
        return Some((None, D::SI));
    }

    match spec.split_once(char::is_whitespace) {
        Some((value_format, symbol)) => D::unit_by_symbol(symbol.trim()).map(|unit| (Some(value_format), unit)),
        None => match D::unit_by_symbol(spec) {
            Some(unit) => Some((None, unit)),
            None => Some((Some(spec), D::SI)),
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity rendering
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Quantity<D> {
    /// Renders with a composite format string (`"F2 km/h"`, `"km"`, `"E3"` or `""`), using the global cache and the
    /// invariant culture.
    ///
    /// A single token is looked up as a unit symbol first and only then read as a numeric format, so for a mass
    /// `"g"` means grams and for a force `"N"` means newtons. Write `"G kg"` or `"N2 N"` to get the numeric formats.
    ///
    /// ```rust
    /// use metrum_core::{Mass, Quantity};
    ///
    /// let m = Quantity::<Mass>::from_kilograms(1.5);
    /// assert_eq!(m.format("g"), "1500 g");
    /// assert_eq!(m.format("G kg"), "1.5 kg");
    /// ```
    pub fn format(&self, spec: &str) -> String {
        self.format_in(FormatCache::global(), spec, SymbolStyle::Plain, &Culture::INVARIANT)
    }

    /// Renders with a structured request, using the global cache and the invariant culture.
    pub fn format_with(&self, value_format: Option<&str>, unit: Unit<D>, style: SymbolStyle) -> String {
        FormatCache::global()
            .get_or_create(value_format, unit, style)
            .render(self.si_value(), &Culture::INVARIANT)
    }

    /// Renders with a composite format string through an explicit cache, symbol style and numeral convention.
    pub fn format_in<C: NumberConvention + ?Sized>(
        &self,
        cache: &FormatCache,
        spec: &str,
        style: SymbolStyle,
        convention: &C,
    ) -> String {
        cache
            .get_or_create_composite::<D>(spec, style)
            .render(self.si_value(), convention)
    }
}

/// Renders in the SI unit; a precision (`{:.2}`) selects fixed-point with that many decimals.
impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match f.precision() {
            Some(precision) => self.format_with(Some(&format!("F{precision}")), D::SI, SymbolStyle::Plain),
            None => self.format_with(None, D::SI, SymbolStyle::Plain),
        };
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::acceleration::Acceleration;
    use crate::units::dimensionless::Dimensionless;
    use crate::units::force::Force;
    use crate::units::length::Length;
    use crate::units::mass::Mass;
    use crate::units::speed::Speed;
    use std::thread;

    // ─────────────────────────────────────────────────────────────────────────────
    // Exponent notation
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn exponent_notation_examples() {
        assert_eq!(exponent_notation("km/h"), "km·h⁻¹");
        assert_eq!(exponent_notation("m/s²"), "m·s⁻²");
        assert_eq!(exponent_notation("1/s"), "s⁻¹");
        assert_eq!(exponent_notation("kg·m²/s³"), "kg·m²·s⁻³");
        assert_eq!(exponent_notation("m/s/s"), "m·s⁻¹·s⁻¹");
        assert_eq!(exponent_notation("%"), "%");
        assert_eq!(exponent_notation(""), "");
    }

    #[test]
    fn exponents_out_of_i32_range_pass_through() {
        assert_eq!(exponent_notation("1/s^-2147483648"), "s^-2147483648");
        assert_eq!(exponent_notation("m⁹⁹⁹⁹⁹⁹⁹⁹⁹⁹/s"), "m⁹⁹⁹⁹⁹⁹⁹⁹⁹⁹·s⁻¹");
        assert_eq!(exponent_notation("m/s^2147483647"), "m·s⁻²¹⁴⁷⁴⁸³⁶⁴⁷");

        let odd = Unit::<Length>::try_new("odd", "m/s^-2147483648", 1.5).unwrap();
        assert_eq!(odd.exponent_symbol(), "m·s^-2147483648");
        assert_eq!(odd.symbol_for(SymbolStyle::Exponent), "m·s^-2147483648");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Cache behaviour
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equivalent_requests_share_one_plan() {
        let cache = FormatCache::new();
        let a = cache.get_or_create(Some("F2"), Length::METER, SymbolStyle::Plain);
        let b = cache.get_or_create(Some(" f "), Length::METER, SymbolStyle::Plain);
        let c = cache.get_or_create_composite::<Length>("F2 m", SymbolStyle::Plain);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_keys_get_distinct_plans() {
        let cache = FormatCache::new();
        assert!(cache.is_empty());
        cache.get_or_create(Some("F2"), Length::METER, SymbolStyle::Plain);
        cache.get_or_create(Some("F2"), Length::KILOMETER, SymbolStyle::Plain);
        cache.get_or_create(Some("F2"), Speed::METER_PER_SECOND, SymbolStyle::Exponent);
        cache.get_or_create(None, Length::METER, SymbolStyle::Plain);
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn composite_resolution() {
        let cache = FormatCache::new();
        let si = cache.get_or_create_composite::<Length>("", SymbolStyle::Plain);
        assert_eq!(si.symbol(), Some("m"));
        assert_eq!(si.number_format(), Some(NumberFormat::General(None)));

        let unit_only = cache.get_or_create_composite::<Length>("km", SymbolStyle::Plain);
        assert_eq!(unit_only.symbol(), Some("km"));

        let number_only = cache.get_or_create_composite::<Length>("E2", SymbolStyle::Plain);
        assert_eq!(number_only.number_format(), Some(NumberFormat::Scientific(2)));
        assert_eq!(number_only.symbol(), Some("m"));

        let exponent_spelling = cache.get_or_create_composite::<Speed>("F0 km·h⁻¹", SymbolStyle::Plain);
        assert_eq!(exponent_spelling.symbol(), Some("km/h"));
    }

    #[test]
    fn concurrent_population_yields_one_plan() {
        let cache = Arc::new(FormatCache::new());
        let plans: Vec<Arc<FormatPlan>> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_create_composite::<Speed>("F1 km/h", SymbolStyle::Exponent))
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(cache.len(), 1);
        assert!(plans.iter().all(|plan| Arc::ptr_eq(plan, &plans[0])));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn render_in_requested_unit() {
        let cache = FormatCache::new();
        let d = Quantity::<Length>::from_meters(1234.56);
        let text = d.format_in(&cache, "F3 km", SymbolStyle::Plain, &Culture::INVARIANT);
        assert_eq!(text, "1.235 km");
        let german = d.format_in(&cache, "N1", SymbolStyle::Plain, &Culture::new(',', '.'));
        assert_eq!(german, "1.234,6 m");
    }

    #[test]
    fn exponent_style_rendering() {
        let a = Quantity::<Acceleration>::from_meters_per_second_squared(9.5);
        assert_eq!(a.format_with(Some("F1"), Acceleration::SI, SymbolStyle::Exponent), "9.5 m·s⁻²");
        assert_eq!(a.format_with(Some("F1"), Acceleration::SI, SymbolStyle::Plain), "9.5 m/s²");
    }

    #[test]
    fn malformed_formats_degrade_to_placeholder() {
        let cache = FormatCache::new();
        let d = Quantity::<Length>::from_meters(1.0);
        assert_eq!(d.format_in(&cache, "Q9 m", SymbolStyle::Plain, &Culture::INVARIANT), FALLBACK_TEXT);
        assert_eq!(d.format_in(&cache, "F2 furlong", SymbolStyle::Plain, &Culture::INVARIANT), FALLBACK_TEXT);
        assert!(cache.get_or_create(Some("F100"), Length::METER, SymbolStyle::Plain).is_fallback());
    }

    #[test]
    fn placeholders_do_not_grow_the_cache() {
        let cache = FormatCache::new();
        let d = Quantity::<Length>::from_meters(1.0);
        for i in 0..50 {
            d.format_in(&cache, &format!("F2 bogus{i}"), SymbolStyle::Plain, &Culture::INVARIANT);
            d.format_in(&cache, &format!("Q{i} m"), SymbolStyle::Plain, &Culture::INVARIANT);
            cache.get_or_create(Some(&format!("Z{i}")), Length::METER, SymbolStyle::Plain);
        }
        assert!(cache.is_empty());
        assert!(cache.composites.read().is_empty());

        d.format_in(&cache, "F2 km", SymbolStyle::Plain, &Culture::INVARIANT);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.composites.read().len(), 1);
    }

    #[test]
    fn single_token_prefers_unit_symbol() {
        let m = Quantity::<Mass>::from_kilograms(1.5);
        assert_eq!(m.format("g"), "1500 g");
        assert_eq!(m.format("G"), "1.5 kg");
        let f = Quantity::<Force>::from_newtons(1234.5);
        assert_eq!(f.format("N"), "1234.5 N");
        assert_eq!(f.format("N1 N"), "1,234.5 N");
    }

    #[test]
    fn empty_symbol_renders_number_only() {
        let r = Quantity::new(0.25, Dimensionless::RATIO);
        assert_eq!(r.to_string(), "0.25");
        assert_eq!(r.format("F1 %"), "25.0 %");
    }

    #[test]
    fn display_uses_si_unit_and_precision() {
        let v = Quantity::<Speed>::from_kilometers_per_hour(36.0);
        assert_eq!(format!("{v:.1}"), "10.0 m/s");
        assert_eq!(Quantity::<Length>::from_kilometers(1.0).to_string(), "1000 m");
    }
}
