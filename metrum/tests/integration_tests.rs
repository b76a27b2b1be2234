//! Integration-level tests for the `metrum` facade crate.

use metrum::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Construction and conversion
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_length() {
    let d = Quantity::new(1.0, Length::KILOMETER);
    assert_eq!(d.value_in(Length::METER), 1000.0);
    assert_eq!(d.value_in(Length::MILLIMETER), 1_000_000.0);
    assert_eq!(d.default_unit(), Length::METER);
}

#[test]
fn smoke_test_time() {
    let day = Quantity::<Time>::from_days(1.0);
    assert_abs_diff_eq!(day.in_seconds(), 86_400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(day.in_hours(), 24.0, epsilon = 1e-12);
}

#[test]
fn smoke_test_mass() {
    let m = Quantity::<Mass>::from_kilograms(1000.0);
    assert_abs_diff_eq!(m.in_grams(), 1_000_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(m.in_tonnes(), 1.0, epsilon = 1e-12);
}

#[test]
fn smoke_test_pressure() {
    let p = Quantity::<Pressure>::from_atmospheres(1.0);
    assert_relative_eq!(p.in_pascals(), 101_325.0, max_relative = 1e-12);
    assert_relative_eq!(p.in_hectopascals(), 1013.25, max_relative = 1e-12);
}

#[test]
fn same_dimension_ratio_is_a_plain_number() {
    let ratio: f64 = Quantity::<Mass>::from_kilograms(4.0) / Quantity::<Mass>::from_kilograms(2.0);
    assert_eq!(ratio, 2.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Algebra
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn work_is_force_times_distance() {
    let work: Quantity<Energy> = Quantity::<Force>::from_newtons(10.0) * Quantity::<Length>::from_meters(2.0);
    assert_eq!(work, Quantity::<Energy>::from_joules(20.0));
}

#[test]
fn power_from_energy_over_time() {
    let e = Quantity::<Energy>::from_kilowatt_hours(1.0);
    let t = Quantity::<Time>::from_hours(1.0);
    let p: Quantity<Power> = e / t;
    assert_relative_eq!(p.in_kilowatts(), 1.0, max_relative = 1e-12);
}

#[test]
fn chained_kinematics() {
    let a = Quantity::<Acceleration>::from_standard_gravities(1.0);
    let m = Quantity::<Mass>::from_kilograms(70.0);
    let weight: Quantity<Force> = m * a;
    assert_relative_eq!(weight.in_newtons(), 70.0 * 9.80665, max_relative = 1e-12);

    let v: Quantity<Speed> = a * Quantity::<Time>::from_seconds(2.0);
    let d: Quantity<Length> = v * Quantity::<Time>::from_seconds(3.0);
    assert_relative_eq!(d.in_meters(), 9.80665 * 6.0, max_relative = 1e-12);
}

#[test]
fn every_declared_rule_is_dimensionally_sound() {
    for rule in ALGEBRA_RULES {
        let derived = algebra::derive_vector(rule.lhs_vector, rule.op, rule.rhs_vector);
        assert_eq!(derived, rule.output_vector, "{rule}");
        if !rule.is_scalar() {
            assert_eq!(algebra::dimension_name_for(derived), Some(rule.output), "{rule}");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn composite_and_structured_formats_agree() {
    let d = Quantity::<Length>::from_kilometers(1.0);
    let composite = d.format("F2 m");
    let structured = d.format_with(Some("F2"), Length::METER, SymbolStyle::Plain);
    assert_eq!(composite, "1000.00 m");
    assert_eq!(composite, structured);
}

#[test]
fn both_request_shapes_share_one_plan() {
    let cache = FormatCache::new();
    let d = Quantity::<Length>::from_kilometers(1.0);
    let a = d.format_in(&cache, "F2 m", SymbolStyle::Plain, &Culture::INVARIANT);
    let plan = cache.get_or_create(Some("F2"), Length::METER, SymbolStyle::Plain);
    assert_eq!(plan.render(d.si_value(), &Culture::INVARIANT), a);
    assert_eq!(cache.len(), 1);
}

#[test]
fn exponent_symbol_style() {
    let a = Quantity::<Acceleration>::from_meters_per_second_squared(9.5);
    assert_eq!(a.format_with(Some("F1"), Acceleration::METER_PER_SECOND_SQUARED, SymbolStyle::Exponent), "9.5 m·s⁻²");
}

#[test]
fn unknown_unit_renders_placeholder() {
    let d = Quantity::<Length>::from_meters(3.0);
    assert_eq!(d.format("F2 furlong"), format::FALLBACK_TEXT);
}

#[test]
fn localized_rendering() {
    let german = Culture::new(',', '.');
    let d = Quantity::<Length>::from_meters(1234.5);
    assert_eq!(d.format_in(FormatCache::global(), "N1 m", SymbolStyle::Plain, &german), "1.234,5 m");
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_reports_unknown_units() {
    let err = Quantity::<Length>::parse("5 xyz").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnknownUnit);
    assert!(Quantity::<Length>::try_parse("5 xyz").is_none());
}

#[test]
fn parse_in_display_units() {
    let p: Quantity<Pressure> = "2.5 bar".parse().unwrap();
    assert_relative_eq!(p.in_kilopascals(), 250.0, max_relative = 1e-12);
    let v: Quantity<Speed> = "90 km/h".parse().unwrap();
    assert_relative_eq!(v.in_meters_per_second(), 25.0, max_relative = 1e-12);
}

#[test]
fn text_round_trip_across_dimensions() {
    fn check<D: Dimension>(values: &[f64]) {
        for &value in values {
            let q = Quantity::<D>::new(value, D::SI);
            let text = q.to_string();
            assert_eq!(Quantity::<D>::parse(&text).unwrap(), q, "{text}");
        }
    }

    let values = [0.0, -42.125, 1e-300, 6.02214076e23, 1.7976931348623157e308, 0.1 + 0.2];
    check::<Length>(&values);
    check::<Energy>(&values);
    check::<Pressure>(&values);
    check::<Frequency>(&values);
    check::<Time>(&values);
}

/// Formats every unit of `D` with `R` in both symbol styles and parses the text back.
fn every_unit_round_trips_through_text<D: Dimension>() -> &'static str {
    let magnitudes = [0.0, 1.0, -42.125, 1e-7, 3.5e5, 6.02214076e23, -1e-200];
    for unit in D::UNITS {
        for value in magnitudes {
            let q = Quantity::<D>::new(value, *unit);
            assert_relative_eq!(unit.from_si(unit.to_si(value)), value, max_relative = 1e-12);
            for style in [SymbolStyle::Plain, SymbolStyle::Exponent] {
                let text = q.format_with(Some("R"), *unit, style);
                let back = Quantity::<D>::parse(&text)
                    .unwrap_or_else(|err| panic!("{} `{text}` did not parse: {err}", D::NAME));
                assert_relative_eq!(back.si_value(), q.si_value(), max_relative = 1e-12);
                assert_relative_eq!(back.value_in(*unit), value, max_relative = 1e-12);
            }
        }
    }
    D::NAME
}

#[test]
fn text_round_trip_for_every_unit_of_every_dimension() {
    let checked = [
        every_unit_round_trips_through_text::<Length>(),
        every_unit_round_trips_through_text::<Area>(),
        every_unit_round_trips_through_text::<Volume>(),
        every_unit_round_trips_through_text::<Mass>(),
        every_unit_round_trips_through_text::<Time>(),
        every_unit_round_trips_through_text::<Speed>(),
        every_unit_round_trips_through_text::<Acceleration>(),
        every_unit_round_trips_through_text::<Force>(),
        every_unit_round_trips_through_text::<Energy>(),
        every_unit_round_trips_through_text::<Power>(),
        every_unit_round_trips_through_text::<Pressure>(),
        every_unit_round_trips_through_text::<Frequency>(),
        every_unit_round_trips_through_text::<Dimensionless>(),
    ];
    let expected: Vec<&str> = DIMENSIONS.iter().map(|info| info.name).collect();
    assert_eq!(checked.to_vec(), expected);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tolerance comparison
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn equals_within_uses_si_magnitudes() {
    let a = Quantity::<Length>::from_meters(1000.0);
    let b = Quantity::<Length>::from_kilometers(1.0004);
    assert_eq!(a.equals_within(b, Quantity::<Length>::from_meters(1.0)), Ok(true));
    assert_eq!(a.equals_within(b, Quantity::<Length>::from_centimeters(1.0)), Ok(false));
    assert!(a.equals_within(b, Quantity::<Length>::ZERO).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Persistence
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "xml")]
#[test]
fn xml_round_trip_is_bit_exact() {
    for value in [0.1 + 0.2, -0.0, 1e-310, 123_456.789] {
        let q = Quantity::<Energy>::from_joules(value);
        let xml = xml::to_xml("Energy", &q).unwrap();
        let back = xml::from_xml::<Energy>(&xml).unwrap();
        assert_eq!(back.si_value().to_bits(), q.si_value().to_bits(), "{xml}");
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_with_unit_round_trip() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Leg {
        #[serde(with = "metrum::serde_with_unit")]
        distance: Quantity<Length>,
    }

    let json = serde_json::to_string(&Leg {
        distance: Quantity::<Length>::from_kilometers(2.0),
    })
    .unwrap();
    assert_eq!(json, r#"{"distance":{"value":2000.0,"unit":"m"}}"#);
    let back: Leg = serde_json::from_str(r#"{"distance":{"value":3.0,"unit":"mi"}}"#).unwrap();
    assert_relative_eq!(back.distance.in_miles(), 3.0, max_relative = 1e-12);
}

proptest! {
    #[test]
    fn prop_format_parse_round_trip(value in -1e15..1e15f64) {
        let q = Quantity::<Force>::from_newtons(value);
        prop_assert_eq!(Quantity::<Force>::parse(&q.format("R N")).unwrap(), q);
    }
}
