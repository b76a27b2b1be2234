//! Area units (`L²`).

use crate::Dimension;

/// Dimension tag for area.
#[derive(Dimension)]
#[dimension(name = "Area", length = 2)]
#[unit(name = "square_meter", symbol = "m²", ratio = 1.0, si)]
#[unit(name = "square_kilometer", symbol = "km²", ratio = 1e6)]
#[unit(name = "square_centimeter", symbol = "cm²", ratio = 1e-4)]
#[unit(name = "square_millimeter", symbol = "mm²", ratio = 1e-6)]
#[unit(name = "hectare", symbol = "ha", ratio = 1e4)]
#[unit(name = "acre", symbol = "ac", ratio = 4_046.856_422_4)]
#[unit(name = "square_foot", symbol = "ft²", ratio = 0.092_903_04, plural = "square_feet")]
pub enum Area {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::Length;
    use crate::Quantity;
    use approx::assert_relative_eq;

    #[test]
    fn hectare_is_a_square_hectometre() {
        let side = Quantity::<Length>::from_meters(100.0);
        let a: Quantity<Area> = side * side;
        assert_eq!(a.in_hectares(), 1.0);
    }

    #[test]
    fn acre_in_square_feet() {
        assert_relative_eq!(
            Quantity::<Area>::from_acres(1.0).in_square_feet(),
            43_560.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn exponent_symbols_resolve() {
        assert_eq!(Area::unit_by_symbol("km²"), Some(Area::SQUARE_KILOMETER));
        assert_eq!(Area::SQUARE_METER.exponent_symbol(), "m²");
    }
}
