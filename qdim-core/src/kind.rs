//! Statically typed quantity kinds.
//!
//! A *kind* is a named quantity type (`Length`, `Torque`, ...) with one fixed [`Dimensions`] vector. Kinds are
//! emitted by `qdim-gen`; this module only defines the contract they share and the table record describing them.

use crate::{DimensionMismatch, Dimensions, Operation, Quantity};

/// A named quantity type backed by an `f64` in its canonical unit.
pub trait Kind: Copy {
    /// Type name, e.g. `"Length"`.
    const NAME: &'static str;
    /// The kind's dimension vector.
    const DIMENSIONS: Dimensions;

    /// Wraps a value already expressed in the canonical unit.
    fn from_value(value: f64) -> Self;

    /// The value in the canonical unit.
    fn value(self) -> f64;

    /// Erases the kind into a runtime [`Quantity`].
    #[inline]
    fn into_quantity(self) -> Quantity {
        Quantity::new(Self::DIMENSIONS, self.value())
    }

    /// Checks `quantity`'s dimensions against this kind and copies the value on a match.
    #[inline]
    fn try_from_quantity(quantity: Quantity) -> Result<Self, DimensionMismatch> {
        if quantity.dimensions() == Self::DIMENSIONS {
            Ok(Self::from_value(quantity.value()))
        } else {
            Err(DimensionMismatch::new(
                Operation::Convert(Self::NAME),
                quantity.dimensions(),
                Self::DIMENSIONS,
            ))
        }
    }
}

/// Static description of a generated kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KindInfo {
    /// Type name.
    pub name: &'static str,
    /// Dimension vector.
    pub dimensions: Dimensions,
    /// Named conversions as `(name, ratio to the canonical unit)`.
    pub conversions: &'static [(&'static str, f64)],
}

impl KindInfo {
    /// Name of the conversion whose ratio is exactly `1.0`, if one is declared.
    pub fn canonical_unit(&self) -> Option<&'static str> {
        self.conversions
            .iter()
            .find(|(_, ratio)| *ratio == 1.0)
            .map(|(name, _)| *name)
    }

    /// Ratio of the named conversion.
    pub fn ratio(&self, unit: &str) -> Option<f64> {
        self.conversions
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, ratio)| *ratio)
    }
}

/// Every entry of `table` whose dimensions equal `dimensions`, in table order.
///
/// More than one entry can match (e.g. energy and torque share a vector).
pub fn kinds_with_dimensions(
    table: &'static [KindInfo],
    dimensions: Dimensions,
) -> impl Iterator<Item = &'static KindInfo> {
    table.iter().filter(move |info| info.dimensions == dimensions)
}
