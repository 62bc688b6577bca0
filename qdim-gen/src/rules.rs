//! Compatibility predicates.
//!
//! Each rule decides whether `result` is the kind an operation on the operand kinds produces. Comparison is exact
//! [`Dimensions`] equality.

use qdim_core::Dimensions;

/// `a * b` has the dimensions of `result`.
#[inline]
pub fn is_multiply_compatible(a: Dimensions, b: Dimensions, result: Dimensions) -> bool {
    a + b == result
}

/// `a / b` has the dimensions of `result`.
#[inline]
pub fn is_divide_compatible(a: Dimensions, b: Dimensions, result: Dimensions) -> bool {
    a - b == result
}

/// `sqrt(a)` has the dimensions of `result`.
#[inline]
pub fn is_sqrt_compatible(a: Dimensions, result: Dimensions) -> bool {
    a.halve() == result
}

/// `a ^ exponent` has the dimensions of `result`.
#[inline]
pub fn is_pow_compatible(a: Dimensions, result: Dimensions, exponent: f64) -> bool {
    a.scale(exponent) == result
}

/// `1 / a` has the dimensions of `result`.
#[inline]
pub fn is_inverse_compatible(a: Dimensions, result: Dimensions) -> bool {
    result == -a
}
