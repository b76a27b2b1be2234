//! Derive macro implementation used by `metrum-core`.
//!
//! `metrum-derive` is an implementation detail of this workspace. The `Dimension` derive expands in terms of
//! `crate::Dimension`, `crate::Unit`, `crate::DimensionVector` and `crate::Quantity`, so it is intended to be used by
//! `metrum-core` (or by crates that expose an identical crate-root API and own `Quantity`).
//!
//! Most users should depend on `metrum` instead and use the predefined dimensions.
//!
//! # Generated items
//!
//! For a dimension marker type `Length`, the derive emits:
//!
//! - one associated `const` per unit (`Length::KILOMETER: Unit<Length>`)
//! - `crate::Dimension for Length` (name, exponent vector, SI unit, unit registry)
//! - a `const` item that validates the unit table at compile time
//! - `Quantity<Length>::from_kilometers(v)` / `Quantity<Length>::in_kilometers()` for every unit
//!
//! # Attributes
//!
//! Exactly one `#[dimension(...)]` attribute:
//!
//! - `name = "Length"`: display name of the dimension
//! - `mass = .., length = .., time = .., current = .., temperature = .., amount = .., luminosity = ..`: SI base
//!   exponents, all optional and defaulting to `0`
//!
//! One or more `#[unit(...)]` attributes, in registry order:
//!
//! - `name = "kilometer"`: snake_case unit name, also used for the generated identifiers
//! - `symbol = "km"`: printable symbol
//! - `ratio = 1000.0`: scale factor to the SI unit of the dimension
//! - `plural = "kilometers"`: optional, defaults to `name` + `s`
//! - `si`: marks the SI unit; exactly one unit must carry it

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Names of the SI base axes, in `DimensionVector::new` argument order.
const BASE_AXES: [&str; 7] = [
    "mass",
    "length",
    "time",
    "current",
    "temperature",
    "amount",
    "luminosity",
];

/// Derive `crate::Dimension`, the unit constants, and the `from_*`/`in_*` constructors for a dimension marker.
///
/// The derive must be paired with one `#[dimension(...)]` attribute and at least one `#[unit(...)]` attribute.
///
/// This macro is intended for use by `metrum-core`.
#[proc_macro_derive(Dimension, attributes(dimension, unit))]
pub fn derive_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    let dimension = parse_dimension_attribute(&input.attrs)?;
    let units = parse_unit_attributes(&input.attrs)?;

    let si_units: Vec<&UnitAttribute> = units.iter().filter(|u| u.si).collect();
    let si = match si_units.as_slice() {
        [only] => *only,
        [] => {
            return Err(syn::Error::new(
                ident.span(),
                "exactly one #[unit(...)] must be marked `si`",
            ))
        }
        [_, second, ..] => {
            return Err(syn::Error::new(
                second.name.span(),
                "only one #[unit(...)] may be marked `si`",
            ))
        }
    };

    let dimension_name = &dimension.name;
    let exponents = dimension.exponents.iter().map(|exponent| match exponent {
        Some(expr) => quote!(#expr),
        None => quote!(0),
    });
    let si_const = si.const_ident();

    let unit_consts = units.iter().map(|unit| {
        let const_ident = unit.const_ident();
        let words = unit.name.value().replace('_', " ");
        let symbol = &unit.symbol;
        let ratio = &unit.ratio;
        let doc = format!("{} (`{}`).", capitalize(&words), unit.symbol.value());
        quote! {
            #[doc = #doc]
            pub const #const_ident: crate::Unit<#ident> = crate::Unit::new(#words, #symbol, #ratio);
        }
    });

    let registry = units.iter().map(|unit| {
        let const_ident = unit.const_ident();
        quote!(Self::#const_ident)
    });

    let constructors = units.iter().map(|unit| {
        let const_ident = unit.const_ident();
        let plural = unit.plural();
        let from_ident = format_ident!("from_{}", plural);
        let in_ident = format_ident!("in_{}", plural);
        let from_doc = format!("Creates a quantity from a value in {}.", plural.replace('_', " "));
        let in_doc = format!("Returns this quantity expressed in {}.", plural.replace('_', " "));
        quote! {
            #[doc = #from_doc]
            #[inline]
            pub const fn #from_ident(value: f64) -> Self {
                Self::new(value, #ident::#const_ident)
            }

            #[doc = #in_doc]
            #[inline]
            pub const fn #in_ident(self) -> f64 {
                self.value_in(#ident::#const_ident)
            }
        }
    });

    let expanded = quote! {
        impl #ident {
            #(#unit_consts)*
        }

        impl crate::Dimension for #ident {
            const NAME: &'static str = #dimension_name;
            const VECTOR: crate::DimensionVector = crate::DimensionVector::new(#(#exponents),*);
            const SI: crate::Unit<Self> = Self::#si_const;
            const UNITS: &'static [crate::Unit<Self>] = &[#(#registry),*];
        }

        const _: () = crate::check_unit_table::<#ident>(
            <#ident as crate::Dimension>::UNITS,
            <#ident as crate::Dimension>::SI,
        );

        impl crate::Quantity<#ident> {
            #(#constructors)*
        }
    };

    Ok(expanded)
}

fn capitalize(words: &str) -> String {
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    name: LitStr,
    exponents: [Option<Expr>; 7],
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut exponents: [Option<Expr>; 7] = Default::default();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            let key = ident.to_string();
            if key == "name" {
                name = Some(input.parse()?);
            } else if let Some(axis) = BASE_AXES.iter().position(|a| *a == key) {
                exponents[axis] = Some(input.parse()?);
            } else {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("unknown attribute `{}`", key),
                ));
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;

        Ok(DimensionAttribute { name, exponents })
    }
}

/// Parsed contents of one `#[unit(...)]` attribute.
struct UnitAttribute {
    name: LitStr,
    symbol: LitStr,
    ratio: Expr,
    plural: Option<LitStr>,
    si: bool,
}

impl UnitAttribute {
    fn const_ident(&self) -> Ident {
        Ident::new(&self.name.value().to_uppercase(), self.name.span())
    }

    fn plural(&self) -> String {
        match &self.plural {
            Some(plural) => plural.value(),
            None => format!("{}s", self.name.value()),
        }
    }
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut symbol: Option<LitStr> = None;
        let mut ratio: Option<Expr> = None;
        let mut plural: Option<LitStr> = None;
        let mut si = false;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            if ident == "si" && !input.peek(Token![=]) {
                si = true;
            } else {
                input.parse::<Token![=]>()?;
                match ident.to_string().as_str() {
                    "name" => {
                        let lit: LitStr = input.parse()?;
                        if !is_snake_case(&lit.value()) {
                            return Err(syn::Error::new(
                                lit.span(),
                                "unit `name` must be a snake_case identifier",
                            ));
                        }
                        name = Some(lit);
                    }
                    "symbol" => {
                        symbol = Some(input.parse()?);
                    }
                    "ratio" => {
                        ratio = Some(input.parse()?);
                    }
                    "plural" => {
                        plural = Some(input.parse()?);
                    }
                    other => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("unknown attribute `{}`", other),
                        ));
                    }
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;
        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            name,
            symbol,
            ratio,
            plural,
            si,
        })
    }
}

fn is_snake_case(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn parse_dimension_attribute(attrs: &[Attribute]) -> syn::Result<DimensionAttribute> {
    for attr in attrs {
        if attr.path().is_ident("dimension") {
            return attr.parse_args::<DimensionAttribute>();
        }
    }

    Err(syn::Error::new(
        Span::call_site(),
        "missing #[dimension(...)] attribute",
    ))
}

fn parse_unit_attributes(attrs: &[Attribute]) -> syn::Result<Vec<UnitAttribute>> {
    let mut units: Vec<UnitAttribute> = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("unit")) {
        let unit = attr.parse_args::<UnitAttribute>()?;
        if units.iter().any(|u| u.name.value() == unit.name.value()) {
            return Err(syn::Error::new(
                unit.name.span(),
                format!("duplicate unit `{}`", unit.name.value()),
            ));
        }
        units.push(unit);
    }

    if units.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "missing #[unit(...)] attribute",
        ));
    }

    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_dimension_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Speed", length = 1, time = -1)]
            pub enum Speed {}
        };

        let attr = parse_dimension_attribute(&input.attrs).unwrap();
        assert_eq!(attr.name.value(), "Speed");
        assert!(attr.exponents[0].is_none());
        assert!(attr.exponents[1].is_some());
        assert!(attr.exponents[2].is_some());
    }

    #[test]
    fn test_parse_dimension_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum Length {}
        };

        let result = parse_dimension_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing #[dimension(...)] attribute"));
    }

    #[test]
    fn test_parse_dimension_attribute_unknown_axis() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length", colour = 1)]
            pub enum Length {}
        };

        let result = parse_dimension_attribute(&input.attrs);
        assert!(result.is_err());
        assert!(result.err().unwrap().to_string().contains("unknown attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_complete() {
        let tokens = quote! {
            name = "kilometer_per_hour", symbol = "km/h", ratio = 1000.0 / 3600.0, plural = "kilometers_per_hour"
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "km/h");
        assert_eq!(attr.plural(), "kilometers_per_hour");
        assert_eq!(attr.const_ident().to_string(), "KILOMETER_PER_HOUR");
        assert!(!attr.si);
    }

    #[test]
    fn test_parse_unit_attribute_si_flag() {
        let tokens = quote! {
            name = "meter", symbol = "m", ratio = 1.0, si
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert!(attr.si);
        assert_eq!(attr.plural(), "meters");
    }

    #[test]
    fn test_parse_unit_attribute_missing_symbol() {
        let tokens = quote! { name = "meter", ratio = 1.0 };
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_ratio() {
        let tokens = quote! { name = "meter", symbol = "m" };
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `ratio`"));
    }

    #[test]
    fn test_parse_unit_attribute_rejects_non_snake_case_name() {
        let tokens = quote! { name = "Kilo Meter", symbol = "km", ratio = 1e3 };
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let tokens = quote! { name = "meter", symbol = "m", ratio = 1.0, offset = 273.15 };
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.err().unwrap().to_string().contains("unknown attribute"));
    }

    #[test]
    fn test_duplicate_unit_names_are_rejected() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length", length = 1)]
            #[unit(name = "meter", symbol = "m", ratio = 1.0, si)]
            #[unit(name = "meter", symbol = "mtr", ratio = 1.0)]
            pub enum Length {}
        };

        let result = parse_unit_attributes(&input.attrs);
        assert!(result.err().unwrap().to_string().contains("duplicate unit"));
    }

    #[test]
    fn test_derive_requires_exactly_one_si_unit() {
        let none: DeriveInput = parse_quote! {
            #[dimension(name = "Length", length = 1)]
            #[unit(name = "kilometer", symbol = "km", ratio = 1e3)]
            pub enum Length {}
        };
        let err = derive_dimension_impl(none).err().unwrap().to_string();
        assert!(err.contains("exactly one"));

        let two: DeriveInput = parse_quote! {
            #[dimension(name = "Length", length = 1)]
            #[unit(name = "meter", symbol = "m", ratio = 1.0, si)]
            #[unit(name = "metre", symbol = "mt", ratio = 1.0, si)]
            pub enum Length {}
        };
        let err = derive_dimension_impl(two).err().unwrap().to_string();
        assert!(err.contains("only one"));
    }

    #[test]
    fn test_derive_dimension_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length", length = 1)]
            #[unit(name = "meter", symbol = "m", ratio = 1.0, si)]
            #[unit(name = "kilometer", symbol = "km", ratio = 1000.0)]
            pub enum Length {}
        };

        let code = derive_dimension_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Dimension for Length"));
        assert!(code.contains("const NAME : & 'static str = \"Length\""));
        assert!(code.contains("const SI : crate :: Unit < Self > = Self :: METER"));
        assert!(code.contains("pub const KILOMETER : crate :: Unit < Length >"));
        assert!(code.contains("pub const fn from_kilometers"));
        assert!(code.contains("pub const fn in_meters"));
        assert!(code.contains("check_unit_table"));
        assert!(code.contains("DimensionVector :: new (0 , 1 , 0 , 0 , 0 , 0 , 0)"));
    }

    #[test]
    fn test_derive_dimension_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub enum Length {}
        };
        let err = derive_dimension_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }

    #[test]
    fn test_is_snake_case() {
        assert!(is_snake_case("square_meter"));
        assert!(is_snake_case("m2"));
        assert!(!is_snake_case("_meter"));
        assert!(!is_snake_case("Meter"));
        assert!(!is_snake_case(""));
    }
}
