//! Scalar helpers shared by [`Quantity`](crate::Quantity) and the generated kinds.

/// Minimum of two values.
///
/// A NaN operand is returned as-is, and `-0.0` is ordered strictly below `0.0`.
///
/// ```rust
/// use qdim_core::scalar::min;
/// assert!(min(f64::NAN, 5.0).is_nan());
/// assert!(min(0.0, -0.0).is_sign_negative());
/// assert_eq!(min(3.0, 5.0), 3.0);
/// ```
#[inline]
pub fn min(a: f64, b: f64) -> f64 {
    if a.is_nan() {
        return a;
    }
    if b.is_nan() {
        return b;
    }
    if a == 0.0 && b == 0.0 {
        return if a.is_sign_negative() { a } else { b };
    }
    if a <= b {
        a
    } else {
        b
    }
}

/// Maximum of two values.
///
/// A NaN operand is returned as-is, and `0.0` is ordered strictly above `-0.0`.
///
/// ```rust
/// use qdim_core::scalar::max;
/// assert!(max(5.0, f64::NAN).is_nan());
/// assert!(max(-0.0, 0.0).is_sign_positive());
/// ```
#[inline]
pub fn max(a: f64, b: f64) -> f64 {
    if a.is_nan() {
        return a;
    }
    if b.is_nan() {
        return b;
    }
    if a == 0.0 && b == 0.0 {
        return if a.is_sign_positive() { a } else { b };
    }
    if a >= b {
        a
    } else {
        b
    }
}

/// Two-band snap: values in `(min, middle)` become `min`, values in `[middle, max]` become `max`, anything else
/// passes through. `middle = max - (max - min) / 2`.
///
/// ```rust
/// use qdim_core::scalar::cut_range;
/// assert_eq!(cut_range(-1.0, -2.0, 2.0), -2.0);
/// assert_eq!(cut_range(0.0, -2.0, 2.0), 2.0);
/// assert_eq!(cut_range(3.0, -2.0, 2.0), 3.0);
/// ```
#[inline]
pub fn cut_range(value: f64, min: f64, max: f64) -> f64 {
    let middle = max - ((max - min) / 2.0);
    if value > min && value < middle {
        min
    } else if value >= middle && value <= max {
        max
    } else {
        value
    }
}

/// Affine remap of `value` from `[old_min, old_max]` onto `[new_min, new_max]`.
///
/// `old_min == old_max` is not guarded; the result is whatever IEEE-754 division gives.
#[inline]
pub fn map(value: f64, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> f64 {
    (value - old_min) * ((new_max - new_min) / (old_max - old_min)) + new_min
}
