//! XML persistence: `<Length Value="1000"/>`.
//!
//! The `Value` attribute holds the SI magnitude as culture-invariant text. Reading sets the SI magnitude directly, so
//! `from_xml(&to_xml(name, &q)?)? == q` holds bit for bit for every non-NaN quantity.
//!
//! ```rust
//! use metrum_core::length::Length;
//! use metrum_core::xml::{from_xml, to_xml};
//! use metrum_core::Quantity;
//!
//! let d = Quantity::<Length>::from_kilometers(1.0);
//! let xml = to_xml("Distance", &d).unwrap();
//! assert!(xml.contains(r#"Value="1000""#));
//! assert_eq!(from_xml::<Length>(&xml).unwrap(), d);
//! ```

use crate::dimension::Dimension;
use crate::error::XmlError;
use crate::quantity::Quantity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct XmlQuantity {
    #[serde(rename = "@Value")]
    value: f64,
}

/// Writes `quantity` as an `element` with a single `Value` attribute.
pub fn to_xml<D: Dimension>(element: &str, quantity: &Quantity<D>) -> Result<String, XmlError> {
    let record = XmlQuantity {
        value: quantity.si_value(),
    };
    quick_xml::se::to_string_with_root(element, &record).map_err(|err| XmlError::Write(err.to_string()))
}

/// Reads a quantity written by [`to_xml`]; the element name is not checked.
pub fn from_xml<D: Dimension>(xml: &str) -> Result<Quantity<D>, XmlError> {
    let record: XmlQuantity = quick_xml::de::from_str(xml).map_err(|err| XmlError::Read(err.to_string()))?;
    Ok(Quantity::from_si_raw(record.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::energy::Energy;
    use crate::units::length::Length;
    use proptest::prelude::*;

    #[test]
    fn writes_si_magnitude_as_attribute() {
        let xml = to_xml("Length", &Quantity::<Length>::from_millimeters(1500.0)).unwrap();
        assert!(xml.starts_with("<Length"));
        assert!(xml.contains(r#"Value="1.5""#));
    }

    #[test]
    fn reads_foreign_documents() {
        let q = from_xml::<Energy>(r#"<Work Value="-2.5e3"/>"#).unwrap();
        assert_eq!(q.in_joules(), -2500.0);
    }

    #[test]
    fn rejects_missing_or_bad_value() {
        assert!(matches!(from_xml::<Length>("<Length/>"), Err(XmlError::Read(_))));
        assert!(matches!(from_xml::<Length>(r#"<Length Value="far"/>"#), Err(XmlError::Read(_))));
    }

    proptest! {
        #[test]
        fn prop_round_trip_is_bit_exact(value in proptest::num::f64::ANY.prop_filter("NaN", |v| !v.is_nan())) {
            let q = Quantity::<Length>::from_meters(value);
            let back = from_xml::<Length>(&to_xml("Length", &q).unwrap()).unwrap();
            prop_assert_eq!(back.si_value().to_bits(), value.to_bits());
        }
    }
}
