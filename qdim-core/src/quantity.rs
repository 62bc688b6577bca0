//! Runtime quantity values.

use crate::error::Result;
use crate::{float, scalar, DimensionMismatch, Dimensions, Kind, Operation};
use core::fmt;
use core::ops::{Div, Mul, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An `f64` tagged with its [`Dimensions`].
///
/// Multiplication and division always succeed and combine the dimension vectors. Addition, subtraction, `min`
/// and `max` need equal dimensions and report a [`DimensionMismatch`] otherwise.
///
/// ```rust
/// use qdim_core::{Dimensions, Quantity};
///
/// let distance = Quantity::new(Dimensions::LENGTH, 100.0);
/// let time = Quantity::new(Dimensions::TIME, 20.0);
/// let speed = distance / time;
/// assert_eq!(speed.dimensions(), Dimensions::LENGTH - Dimensions::TIME);
/// assert_eq!(speed.value(), 5.0);
///
/// assert!(distance.checked_add(time).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity {
    dimensions: Dimensions,
    value: f64,
}

impl Quantity {
    /// Creates a quantity.
    #[inline]
    pub const fn new(dimensions: Dimensions, value: f64) -> Self {
        Self { dimensions, value }
    }

    /// A dimensionless quantity.
    #[inline]
    pub const fn dimensionless(value: f64) -> Self {
        Self::new(Dimensions::DIMENSIONLESS, value)
    }

    /// The dimension vector.
    #[inline]
    pub const fn dimensions(self) -> Dimensions {
        self.dimensions
    }

    /// The raw value in canonical units.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// `true` when both quantities have exactly the same dimensions.
    #[inline]
    pub fn dimensions_equal(self, other: Quantity) -> bool {
        self.dimensions == other.dimensions
    }

    #[inline]
    fn same_dimensions(self, other: Quantity, operation: Operation) -> Result<()> {
        if self.dimensions_equal(other) {
            Ok(())
        } else {
            Err(DimensionMismatch::new(
                operation,
                self.dimensions,
                other.dimensions,
            ))
        }
    }

    #[inline]
    fn with_value(self, value: f64) -> Self {
        Self::new(self.dimensions, value)
    }

    /// Sum of two quantities with equal dimensions.
    pub fn checked_add(self, other: Quantity) -> Result<Quantity> {
        self.same_dimensions(other, Operation::Add)?;
        Ok(self.with_value(self.value + other.value))
    }

    /// Difference of two quantities with equal dimensions.
    pub fn checked_sub(self, other: Quantity) -> Result<Quantity> {
        self.same_dimensions(other, Operation::Subtract)?;
        Ok(self.with_value(self.value - other.value))
    }

    /// Minimum of two quantities with equal dimensions. See [`scalar::min`] for NaN and signed-zero handling.
    pub fn min(self, other: Quantity) -> Result<Quantity> {
        self.same_dimensions(other, Operation::Min)?;
        Ok(self.with_value(scalar::min(self.value, other.value)))
    }

    /// Maximum of two quantities with equal dimensions. See [`scalar::max`] for NaN and signed-zero handling.
    pub fn max(self, other: Quantity) -> Result<Quantity> {
        self.same_dimensions(other, Operation::Max)?;
        Ok(self.with_value(scalar::max(self.value, other.value)))
    }

    /// Square root: halves the dimensions.
    #[inline]
    pub fn sqrt(self) -> Quantity {
        Self::new(self.dimensions.halve(), float::sqrt(self.value))
    }

    /// Raises to `exp`: scales the dimensions by `exp`.
    #[inline]
    pub fn pow(self, exp: f64) -> Quantity {
        Self::new(self.dimensions.scale(exp), float::powf(self.value, exp))
    }

    /// Rounds up, keeping dimensions.
    #[inline]
    pub fn ceil(self) -> Quantity {
        self.with_value(float::ceil(self.value))
    }

    /// Rounds down, keeping dimensions.
    #[inline]
    pub fn floor(self) -> Quantity {
        self.with_value(float::floor(self.value))
    }

    /// Rounds towards zero, keeping dimensions.
    #[inline]
    pub fn truncate(self) -> Quantity {
        self.with_value(float::trunc(self.value))
    }

    /// Rounds to the nearest integer (ties to even), keeping dimensions.
    #[inline]
    pub fn round(self) -> Quantity {
        self.with_value(float::round(self.value))
    }

    /// Absolute value, keeping dimensions.
    #[inline]
    pub fn abs(self) -> Quantity {
        self.with_value(float::abs(self.value))
    }

    /// See [`scalar::cut_range`].
    #[inline]
    pub fn cut_range(self, min: f64, max: f64) -> Quantity {
        self.with_value(scalar::cut_range(self.value, min, max))
    }

    /// See [`scalar::map`].
    #[inline]
    pub fn map(self, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> Quantity {
        self.with_value(scalar::map(self.value, old_min, old_max, new_min, new_max))
    }

    /// Converts into a statically typed kind, checking dimensions.
    #[inline]
    pub fn to_kind<K: Kind>(self) -> Result<K> {
        K::try_from_quantity(self)
    }

    /// Logarithm of the value in `base` (NaN when `base <= 0` or `base == 1`).
    #[inline]
    pub fn log(self, base: f64) -> f64 {
        float::log(self.value, base)
    }

    /// Sign of the value; zeros and NaN are returned unchanged.
    #[inline]
    pub fn sign(self) -> f64 {
        float::sign(self.value)
    }
}

// Elementary functions apply to the raw value and return a plain number. They are only meaningful for
// dimensionless quantities; dimensions are not checked.
macro_rules! scalar_fns {
    ($($name:ident),* $(,)?) => {
        impl Quantity {
            $(
                #[doc = concat!("`", stringify!($name), "` of the raw value. Dimensions are not checked.")]
                #[inline]
                pub fn $name(self) -> f64 {
                    float::$name(self.value)
                }
            )*
        }
    };
}

scalar_fns!(
    sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh, exp, exp_m1, ln, ln_1p,
    log10, log2,
);

impl Mul for Quantity {
    type Output = Quantity;
    #[inline]
    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.dimensions + rhs.dimensions, self.value * rhs.value)
    }
}

impl Div for Quantity {
    type Output = Quantity;
    #[inline]
    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.dimensions - rhs.dimensions, self.value / rhs.value)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;
    #[inline]
    fn mul(self, rhs: f64) -> Quantity {
        self.with_value(self.value * rhs)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;
    #[inline]
    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;
    #[inline]
    fn div(self, rhs: f64) -> Quantity {
        self.with_value(self.value / rhs)
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;
    #[inline]
    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::new(-rhs.dimensions, self / rhs.value)
    }
}

impl Neg for Quantity {
    type Output = Quantity;
    #[inline]
    fn neg(self) -> Quantity {
        self.with_value(-self.value)
    }
}

impl From<f64> for Quantity {
    #[inline]
    fn from(value: f64) -> Self {
        Self::dimensionless(value)
    }
}

/// Formats as `<value> <dimensions>`, e.g. `9.81 m·s^-2`; dimensionless values print the number only.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if !self.dimensions.is_dimensionless() {
            write!(f, " {}", self.dimensions)?;
        }
        Ok(())
    }
}
