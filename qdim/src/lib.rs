//! Dimension-checked physical quantities.
//!
//! `qdim` is the user-facing crate in this workspace. It re-exports the runtime API from `qdim-core` plus one
//! statically typed kind per entry of `quantities.toml` (`Length`, `Force`, `Energy`, `Torque`, ...), generated at
//! build time by `qdim-gen`.
//!
//! Every kind is a newtype over an `f64` in its canonical unit. Multiplying or dividing two kinds compiles only when
//! the dimensions of the result match another registered kind, and then yields that kind.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Produces the right derived kind from arithmetic (`Mass * Acceleration` is a `Force`).
//! - Keeps kinds that share dimensions apart (energy and torque): one is the operator result, the other is reached
//!   through a named method.
//! - Offers an untyped, runtime-checked [`Quantity`] for values whose kind is only known at runtime.
//!
//! # What this crate does not try to solve
//!
//! - Unit systems beyond the eight fixed base dimensions.
//! - Parsing unit strings.
//! - Exact arithmetic: everything is `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use qdim::prelude::*;
//! use qdim::{Energy, Force, Length, Mass, Time, Torque, Velocity};
//!
//! let d: Length = 1.5_f64.kilometer();
//! let t: Time = 2.0_f64.minute();
//! let v: Velocity = d / t;
//! assert!((v.meter_per_second() - 12.5).abs() < 1e-12);
//!
//! let f: Force = 10.0_f64.newton();
//! let arm: Length = 0.5_f64.meter();
//! let w: Energy = arm * f;
//! let tau: Torque = f * arm;
//! assert_eq!(w.joule(), tau.newton_meter());
//!
//! // The same product, spelled explicitly.
//! let tau: Torque = arm.times_torque(f);
//! assert_eq!(tau.newton_meter(), 5.0);
//!
//! let m: Mass = 2.0_f64.kilogram();
//! let e: Energy = m * v.squared();
//! assert!((e.joule() - 312.5).abs() < 1e-9);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use qdim::{Length, Time};
//!
//! let _ = Length::new(1.0) + Time::new(1.0); // cannot add different kinds
//! ```
//!
//! # Runtime quantities
//!
//! ```rust
//! use qdim::{Dimensions, Length, Quantity};
//!
//! let q = Quantity::new(Dimensions::LENGTH, 3.0);
//! let l = Length::from_quantity(q).unwrap();
//! assert_eq!(l.value(), 3.0);
//! assert!(Length::from_quantity(Quantity::dimensionless(3.0)).is_err());
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `qdim-core`.
//! - `serde`: enables `serde` support; kinds serialize as their raw `f64` value, [`Quantity`] with its dimensions.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! qdim = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Nothing panics. Conversions from a runtime [`Quantity`] return [`DimensionMismatch`] when the dimensions differ;
//! arithmetic follows IEEE-754.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use qdim_core::*;

/// Generated quantity kinds, also re-exported at the crate root.
pub mod quantities;

pub use quantities::*;

/// Every generated kind whose dimensions equal `dimensions`, in declaration order.
///
/// ```rust
/// use qdim::{find_kinds, Energy, Kind};
///
/// let names: Vec<_> = find_kinds(<Energy as Kind>::DIMENSIONS).map(|k| k.name).collect();
/// assert_eq!(names, ["Energy", "Torque"]);
/// ```
pub fn find_kinds(dimensions: Dimensions) -> impl Iterator<Item = &'static KindInfo> {
    kinds_with_dimensions(KINDS, dimensions)
}
