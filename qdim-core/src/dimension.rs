//! Dimension vectors.
//!
//! A [`Dimensions`] value holds one exponent per base dimension. Multiplying two quantities adds their vectors,
//! dividing subtracts them, and raising to a power scales the vector. Equality is exact: exponents are expected to
//! be small integers or halves written as literals, so no tolerance is applied.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The eight base dimensions, in the order they are stored in [`Dimensions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    /// Electric current (ampere).
    Current,
    /// Thermodynamic temperature (kelvin).
    Temperature,
    /// Time (second).
    Time,
    /// Length (metre).
    Length,
    /// Mass (kilogram).
    Mass,
    /// Luminous intensity (candela).
    Luminosity,
    /// Amount of substance (mole).
    Amount,
    /// Plane angle (radian).
    Angle,
}

impl BaseDimension {
    /// All base dimensions in storage order.
    pub const ALL: [BaseDimension; 8] = [
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Time,
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Luminosity,
        BaseDimension::Amount,
        BaseDimension::Angle,
    ];

    /// Symbol of the SI base unit for this dimension.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Time => "s",
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Luminosity => "cd",
            BaseDimension::Amount => "mol",
            BaseDimension::Angle => "rad",
        }
    }
}

/// Exponents of the eight base dimensions.
///
/// ```rust
/// use qdim_core::Dimensions;
///
/// let velocity = Dimensions::LENGTH - Dimensions::TIME;
/// let energy = Dimensions::MASS + velocity * 2.0;
/// assert_eq!(energy, Dimensions::new(0.0, 0.0, -2.0, 2.0, 1.0, 0.0, 0.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Dimensions {
    /// Electric current exponent.
    pub current: f64,
    /// Temperature exponent.
    pub temperature: f64,
    /// Time exponent.
    pub time: f64,
    /// Length exponent.
    pub length: f64,
    /// Mass exponent.
    pub mass: f64,
    /// Luminous intensity exponent.
    pub luminosity: f64,
    /// Amount-of-substance exponent.
    pub amount: f64,
    /// Angle exponent.
    pub angle: f64,
}

impl Dimensions {
    /// The zero vector.
    pub const DIMENSIONLESS: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    /// Electric current to the first power.
    pub const CURRENT: Self = Self::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    /// Temperature to the first power.
    pub const TEMPERATURE: Self = Self::new(0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    /// Time to the first power.
    pub const TIME: Self = Self::new(0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    /// Length to the first power.
    pub const LENGTH: Self = Self::new(0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0);
    /// Mass to the first power.
    pub const MASS: Self = Self::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
    /// Luminous intensity to the first power.
    pub const LUMINOSITY: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    /// Amount of substance to the first power.
    pub const AMOUNT: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0);
    /// Angle to the first power.
    pub const ANGLE: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);

    /// Builds a vector from its eight exponents, in storage order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        current: f64,
        temperature: f64,
        time: f64,
        length: f64,
        mass: f64,
        luminosity: f64,
        amount: f64,
        angle: f64,
    ) -> Self {
        Self {
            current,
            temperature,
            time,
            length,
            mass,
            luminosity,
            amount,
            angle,
        }
    }

    /// Builds a vector from an array in storage order.
    #[inline]
    pub const fn from_array(exponents: [f64; 8]) -> Self {
        let [current, temperature, time, length, mass, luminosity, amount, angle] = exponents;
        Self::new(current, temperature, time, length, mass, luminosity, amount, angle)
    }

    /// Returns the exponents in storage order.
    #[inline]
    pub const fn to_array(self) -> [f64; 8] {
        [
            self.current,
            self.temperature,
            self.time,
            self.length,
            self.mass,
            self.luminosity,
            self.amount,
            self.angle,
        ]
    }

    /// Exponent of a single base dimension.
    #[inline]
    pub const fn exponent(self, base: BaseDimension) -> f64 {
        match base {
            BaseDimension::Current => self.current,
            BaseDimension::Temperature => self.temperature,
            BaseDimension::Time => self.time,
            BaseDimension::Length => self.length,
            BaseDimension::Mass => self.mass,
            BaseDimension::Luminosity => self.luminosity,
            BaseDimension::Amount => self.amount,
            BaseDimension::Angle => self.angle,
        }
    }

    /// Scales every exponent by `k`. This is the dimension of `q.pow(k)`.
    #[inline]
    pub fn scale(self, k: f64) -> Self {
        self.map(|e| e * k)
    }

    /// Halves every exponent. This is the dimension of `q.sqrt()`.
    #[inline]
    pub fn halve(self) -> Self {
        self.scale(0.5)
    }

    /// `true` for the zero vector.
    #[inline]
    pub fn is_dimensionless(self) -> bool {
        self == Self::DIMENSIONLESS
    }

    /// `true` when every exponent is a finite number.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|e| e.is_finite())
    }

    #[inline]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_array(self.to_array().map(f))
    }

    #[inline]
    fn zip(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let a = self.to_array();
        let b = other.to_array();
        Self::from_array(core::array::from_fn(|i| f(a[i], b[i])))
    }
}

impl Add for Dimensions {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for Dimensions {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul<f64> for Dimensions {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Div<f64> for Dimensions {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        self.map(|e| e / rhs)
    }
}

impl Neg for Dimensions {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

/// Formats as a product of SI base symbols, e.g. `kg·m^2·s^-2`; the zero vector formats as `1`.
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Conventional order: mass, length, time, then the rest.
        const ORDER: [BaseDimension; 8] = [
            BaseDimension::Mass,
            BaseDimension::Length,
            BaseDimension::Time,
            BaseDimension::Current,
            BaseDimension::Temperature,
            BaseDimension::Amount,
            BaseDimension::Luminosity,
            BaseDimension::Angle,
        ];

        let mut first = true;
        for base in ORDER {
            let exponent = self.exponent(base);
            if exponent == 0.0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(base.symbol())?;
            if exponent != 1.0 {
                write!(f, "^{}", exponent)?;
            }
        }

        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}
