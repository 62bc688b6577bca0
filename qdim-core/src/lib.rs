//! Runtime core for dimension-checked quantities.
//!
//! `qdim-core` holds everything generated quantity kinds depend on at runtime:
//!
//! - [`Dimensions`]: exponents of the eight base dimensions (current, temperature, time, length, mass, luminous
//!   intensity, amount of substance, angle).
//! - [`Quantity`]: an `f64` tagged with a [`Dimensions`] vector, with dimension-checked addition and comparison.
//! - [`Kind`] and [`KindInfo`]: the contract and the static record shared by every generated kind.
//! - [`DimensionMismatch`]: the error returned when two dimension vectors had to be equal and were not.
//!
//! Most users should depend on `qdim` (the facade crate), which also contains the generated kinds.
//!
//! # Quick start
//!
//! ```rust
//! use qdim_core::{Dimensions, Quantity};
//!
//! let mass = Quantity::new(Dimensions::MASS, 2.0);
//! let accel = Quantity::new(Dimensions::LENGTH - Dimensions::TIME * 2.0, 9.81);
//! let force = mass * accel;
//! assert_eq!(force.dimensions(), Dimensions::MASS + Dimensions::LENGTH - Dimensions::TIME * 2.0);
//!
//! // Adding a force to a mass is rejected.
//! assert!(force.checked_add(mass).is_err());
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build without `std`:
//!
//! ```toml
//! [dependencies]
//! qdim-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: derives `Serialize`/`Deserialize` for [`Dimensions`] and [`Quantity`].
//!
//! # Panics and errors
//!
//! No operation panics. Operations that need equal dimensions return [`Result`]; everything else follows IEEE-754
//! (NaN and infinities propagate).

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

mod dimension;
mod error;
mod kind;
mod quantity;

pub mod float;
pub mod scalar;

pub use dimension::{BaseDimension, Dimensions};
pub use error::{DimensionMismatch, Operation, Result};
pub use kind::{kinds_with_dimensions, Kind, KindInfo};
pub use quantity::Quantity;
