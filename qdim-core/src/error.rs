//! Runtime dimension errors.

use crate::Dimensions;
use core::fmt;
use thiserror::Error;

/// The operation that required matching dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `lhs + rhs`.
    Add,
    /// `lhs - rhs`.
    Subtract,
    /// `min(lhs, rhs)`.
    Min,
    /// `max(lhs, rhs)`.
    Max,
    /// Conversion of a quantity into the named kind.
    Convert(&'static str),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => f.write_str("add"),
            Operation::Subtract => f.write_str("subtract"),
            Operation::Min => f.write_str("take the minimum of"),
            Operation::Max => f.write_str("take the maximum of"),
            Operation::Convert(kind) => write!(f, "convert to {}", kind),
        }
    }
}

/// Two quantities (or a quantity and a target kind) had different dimensions.
///
/// For [`Operation::Convert`], `lhs` is the source quantity's dimensions and `rhs` the target kind's.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("cannot {operation}: dimensions differ ({lhs} vs {rhs})")]
pub struct DimensionMismatch {
    /// What was being attempted.
    pub operation: Operation,
    /// Dimensions of the left operand (or the source quantity).
    pub lhs: Dimensions,
    /// Dimensions of the right operand (or the target kind).
    pub rhs: Dimensions,
}

impl DimensionMismatch {
    /// Creates a mismatch report.
    #[inline]
    pub const fn new(operation: Operation, lhs: Dimensions, rhs: Dimensions) -> Self {
        Self {
            operation,
            lhs,
            rhs,
        }
    }
}

/// Result alias for dimension-checked operations.
pub type Result<T> = core::result::Result<T, DimensionMismatch>;
