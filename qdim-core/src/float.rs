//! `f64` math that works with and without `std`.
//!
//! With the `std` feature the inherent `f64` methods are used; otherwise the `libm` equivalents. Generated kinds
//! call through here so the facade crate stays `no_std`-capable.

macro_rules! unary_float_fns {
    ($($(#[$meta:meta])* $name:ident => $std:ident, $libm:ident;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(x: f64) -> f64 {
                #[cfg(feature = "std")]
                {
                    x.$std()
                }
                #[cfg(not(feature = "std"))]
                {
                    libm::$libm(x)
                }
            }
        )*
    };
}

unary_float_fns! {
    /// Square root.
    sqrt => sqrt, sqrt;
    /// Smallest integer not less than `x`.
    ceil => ceil, ceil;
    /// Largest integer not greater than `x`.
    floor => floor, floor;
    /// Integer part of `x`, rounding towards zero.
    trunc => trunc, trunc;
    /// Nearest integer, ties to even.
    round => round_ties_even, rint;
    /// Absolute value.
    abs => abs, fabs;
    /// Sine.
    sin => sin, sin;
    /// Cosine.
    cos => cos, cos;
    /// Tangent.
    tan => tan, tan;
    /// Arc sine.
    asin => asin, asin;
    /// Arc cosine.
    acos => acos, acos;
    /// Arc tangent.
    atan => atan, atan;
    /// Hyperbolic sine.
    sinh => sinh, sinh;
    /// Hyperbolic cosine.
    cosh => cosh, cosh;
    /// Hyperbolic tangent.
    tanh => tanh, tanh;
    /// Inverse hyperbolic sine.
    asinh => asinh, asinh;
    /// Inverse hyperbolic cosine.
    acosh => acosh, acosh;
    /// Inverse hyperbolic tangent.
    atanh => atanh, atanh;
    /// `e^x`.
    exp => exp, exp;
    /// `e^x - 1`, accurate near zero.
    exp_m1 => exp_m1, expm1;
    /// Natural logarithm.
    ln => ln, log;
    /// `ln(1 + x)`, accurate near zero.
    ln_1p => ln_1p, log1p;
    /// Base-10 logarithm.
    log10 => log10, log10;
    /// Base-2 logarithm.
    log2 => log2, log2;
}

/// `x` raised to `exp`, with IEEE-754 `pow` semantics.
#[inline]
pub fn powf(x: f64, exp: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.powf(exp)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::pow(x, exp)
    }
}

/// Logarithm of `x` in `base`; NaN when `base` is not positive or equals one.
#[inline]
pub fn log(x: f64, base: f64) -> f64 {
    if base <= 0.0 || base == 1.0 {
        return f64::NAN;
    }
    ln(x) / ln(base)
}

/// Sign of `x`: `-1.0`, `1.0`, or `x` itself for zeros and NaN.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x.is_nan() || x == 0.0 {
        x
    } else if x > 0.0 {
        1.0
    } else {
        -1.0
    }
}
