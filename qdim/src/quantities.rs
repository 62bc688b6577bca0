//! One newtype per kind declared in `quantities.toml`, with the operators `qdim-gen` synthesized between them.
//!
//! Named conversions are available on `f64` through the `<Kind>Conversions` traits (`2.0_f64.kilometer()`), and in the
//! other direction as inherent methods (`length.kilometer()`). Import [`prelude`] to bring every conversion and
//! named-operation trait into scope.

include!(concat!(env!("OUT_DIR"), "/quantities.rs"));
