//! Identifier rules for generated items.

use crate::error::{GenerationError, Result};

/// Names the runtime crate already exports next to the generated kinds.
const RESERVED_KIND_NAMES: &[&str] = &[
    "BaseDimension",
    "DimensionMismatch",
    "Dimensions",
    "KINDS",
    "Kind",
    "KindInfo",
    "Operation",
    "Quantity",
    "Result",
    "prelude",
];

/// Methods every kind already has, plus `f64` inherent methods that would shadow a conversion trait method.
const RESERVED_METHOD_NAMES: &[&str] = &[
    // generated on every kind
    "abs",
    "ceil",
    "cubed",
    "cut_range",
    "floor",
    "from_quantity",
    "map",
    "max",
    "min",
    "new",
    "round",
    "sqrt",
    "squared",
    "truncate",
    "value",
    // f64 inherent
    "acos",
    "acosh",
    "asin",
    "asinh",
    "atan",
    "atan2",
    "atanh",
    "cbrt",
    "clamp",
    "copysign",
    "cos",
    "cosh",
    "exp",
    "exp2",
    "exp_m1",
    "fract",
    "hypot",
    "ln",
    "ln_1p",
    "log",
    "log10",
    "log2",
    "mul_add",
    "powf",
    "powi",
    "recip",
    "signum",
    "sin",
    "sin_cos",
    "sinh",
    "tan",
    "tanh",
    "to_degrees",
    "to_radians",
    "trunc",
];

/// Prefixes of the named fallback methods generated for blacklisted results.
const RESERVED_METHOD_PREFIXES: &[&str] = &["cubed_", "div_", "inverse_", "sqrt_", "squared_", "times_"];

/// `ElectricalResistance` -> `electrical_resistance`.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_uppercase() {
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                // `HTTPServer` -> `http_server`
                Some(p) if p.is_uppercase() => chars.peek().is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// `true` when `name` parses as a plain Rust identifier (keywords and `_` are rejected).
pub fn is_ident(name: &str) -> bool {
    syn::parse_str::<syn::Ident>(name).is_ok()
}

/// `[a-z][a-z0-9_]*`, the shape of every generated method name.
pub fn is_snake_case(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Checks a kind name.
pub fn check_kind_name(name: &str) -> Result<()> {
    let invalid = |reason| GenerationError::InvalidIdentifier {
        name: name.to_string(),
        role: "kind",
        reason,
    };
    if !is_ident(name) {
        return Err(invalid("not a Rust identifier"));
    }
    if RESERVED_KIND_NAMES.contains(&name) {
        return Err(invalid("reserved by the runtime crate"));
    }
    if name.starts_with("r#") {
        return Err(invalid("raw identifiers are not supported"));
    }
    Ok(())
}

/// Checks a conversion name. Returns the reason on failure.
pub fn check_conversion_name(name: &str) -> core::result::Result<(), &'static str> {
    if !is_ident(name) || name.starts_with("r#") {
        return Err("not a Rust identifier");
    }
    if !is_snake_case(name) {
        return Err("not lowercase snake_case");
    }
    if RESERVED_METHOD_NAMES.contains(&name) {
        return Err("clashes with a generated or `f64` method");
    }
    if RESERVED_METHOD_PREFIXES.iter().any(|p| name.starts_with(p)) {
        return Err("uses a prefix reserved for named operations");
    }
    Ok(())
}

/// Name of the extension trait carrying a kind's conversions on `f64`.
pub fn conversions_trait(kind: &str) -> String {
    format!("{}Conversions", kind)
}

/// Type-level names a kind causes to be generated besides itself.
pub fn derived_type_names(kind: &str) -> [String; 3] {
    [
        conversions_trait(kind),
        format!("Times{}", kind),
        format!("Div{}", kind),
    ]
}
