//! Macros for declaring the dimensional algebra.

/// Declares the cross-dimension multiply/divide rules.
///
/// Each line `X * Y => Z;` or `X / Y => Z;` expands to:
///
/// - the `Mul`/`Div` impl between `Quantity<X>` and `Quantity<Y>`, producing `Quantity<Z>` from the product or
///   quotient of the SI magnitudes;
/// - a `const` assertion that `Z::VECTOR == X::VECTOR op Y::VECTOR`, so a physically wrong rule does not build;
/// - one [`AlgebraRule`](crate::algebra::AlgebraRule) entry in `ALGEBRA_RULES`.
///
/// The output `scalar` stands for a bare `f64`, for pairs whose dimensions cancel.
///
/// Same-dimension division (`X / X`) is provided generically by `Quantity` and must not be declared here.
macro_rules! algebra_table {
    ($($lhs:ident $op:tt $rhs:ident => $out:ident;)*) => {
        $( algebra_table!(@impl $lhs $op $rhs => $out); )*

        /// Every declared cross-dimension rule, in declaration order.
        pub const ALGEBRA_RULES: &[AlgebraRule] = &[
            $( algebra_table!(@record $lhs $op $rhs => $out), )*
        ];
    };

    // Operators ───────────────────────────────────────────────────────────────

    (@impl $lhs:ident * $rhs:ident => scalar) => {
        algebra_table!(@check $lhs * $rhs, mul, DimensionVector::DIMENSIONLESS);

        impl Mul<Quantity<$rhs>> for Quantity<$lhs> {
            type Output = f64;
            #[inline]
            fn mul(self, rhs: Quantity<$rhs>) -> f64 {
                self.si_value() * rhs.si_value()
            }
        }
    };

    (@impl $lhs:ident / $rhs:ident => scalar) => {
        algebra_table!(@check $lhs / $rhs, div, DimensionVector::DIMENSIONLESS);

        impl Div<Quantity<$rhs>> for Quantity<$lhs> {
            type Output = f64;
            #[inline]
            fn div(self, rhs: Quantity<$rhs>) -> f64 {
                self.si_value() / rhs.si_value()
            }
        }
    };

    (@impl $lhs:ident * $rhs:ident => $out:ident) => {
        algebra_table!(@check $lhs * $rhs, mul, <$out as Dimension>::VECTOR);

        impl Mul<Quantity<$rhs>> for Quantity<$lhs> {
            type Output = Quantity<$out>;
            #[inline]
            fn mul(self, rhs: Quantity<$rhs>) -> Quantity<$out> {
                Quantity::from_si_raw(self.si_value() * rhs.si_value())
            }
        }
    };

    (@impl $lhs:ident / $rhs:ident => $out:ident) => {
        algebra_table!(@check $lhs / $rhs, div, <$out as Dimension>::VECTOR);

        impl Div<Quantity<$rhs>> for Quantity<$lhs> {
            type Output = Quantity<$out>;
            #[inline]
            fn div(self, rhs: Quantity<$rhs>) -> Quantity<$out> {
                Quantity::from_si_raw(self.si_value() / rhs.si_value())
            }
        }
    };

    // Compile-time vector check ───────────────────────────────────────────────

    (@check $lhs:ident $op:tt $rhs:ident, $combine:ident, $expected:expr) => {
        const _: () = assert!(
            <$lhs as Dimension>::VECTOR
                .$combine(<$rhs as Dimension>::VECTOR)
                .equals($expected),
            concat!(
                "dimension mismatch in algebra rule ",
                stringify!($lhs),
                " ",
                stringify!($op),
                " ",
                stringify!($rhs)
            )
        );
    };

    // Rule records ────────────────────────────────────────────────────────────

    (@record $lhs:ident $op:tt $rhs:ident => scalar) => {
        AlgebraRule {
            lhs: <$lhs as Dimension>::NAME,
            op: algebra_table!(@op $op),
            rhs: <$rhs as Dimension>::NAME,
            output: "scalar",
            lhs_vector: <$lhs as Dimension>::VECTOR,
            rhs_vector: <$rhs as Dimension>::VECTOR,
            output_vector: DimensionVector::DIMENSIONLESS,
            apply: |a, b| Quantity::<$lhs>::from_si_raw(a) $op Quantity::<$rhs>::from_si_raw(b),
        }
    };

    (@record $lhs:ident $op:tt $rhs:ident => $out:ident) => {
        AlgebraRule {
            lhs: <$lhs as Dimension>::NAME,
            op: algebra_table!(@op $op),
            rhs: <$rhs as Dimension>::NAME,
            output: <$out as Dimension>::NAME,
            lhs_vector: <$lhs as Dimension>::VECTOR,
            rhs_vector: <$rhs as Dimension>::VECTOR,
            output_vector: <$out as Dimension>::VECTOR,
            apply: |a, b| (Quantity::<$lhs>::from_si_raw(a) $op Quantity::<$rhs>::from_si_raw(b)).si_value(),
        }
    };

    (@op *) => { AlgebraOp::Mul };
    (@op /) => { AlgebraOp::Div };
}
